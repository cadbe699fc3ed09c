use convert_case::Case;
use convert_case::Casing;
use darling::FromDeriveInput;
use darling::FromField;
use proc_macro2::Ident;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;
use syn::Type;

#[derive(Debug, FromField)]
#[darling(attributes(eagerload))]
struct FieldReceiver {
    pub ident: Option<Ident>,
    pub ty:    Type,

    #[darling(default)]
    pub relationship: bool,

    #[darling(default)]
    pub target: Option<syn::Path>,

    #[darling(default)]
    pub uselist: Option<bool>,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(eagerload), supports(struct_named))]
struct EntityReceiver {
    pub ident: Ident,
    pub data:  darling::ast::Data<(), FieldReceiver>,

    #[darling(default)]
    pub entity_name: Option<String>,

    #[darling(default)]
    pub table_name: Option<String>,
}

#[derive(Debug)]
struct RelationshipInfo {
    pub name:    String,
    pub target:  Type,
    pub uselist: bool,
}

#[derive(Debug)]
struct EntityInfo {
    pub struct_name:   Ident,
    pub entity_name:   String,
    pub table_name:    String,
    pub relationships: Vec<RelationshipInfo>,
}

impl FieldReceiver {
    pub fn to_relationship_info(self) -> darling::Result<Option<RelationshipInfo>> {
        if !self.relationship {
            return Ok(None);
        }

        let ident = self.ident.ok_or_else(|| darling::Error::custom("Expected named field"))?;
        let related = unwrap_related_type(&self.ty);

        let target = match (self.target, related.unknown_wrapper) {
            (Some(path), _) => Type::Path(syn::TypePath { qself: None, path }),
            (None, Some(wrapper)) => {
                return Err(darling::Error::custom(format!(
                    "cannot infer the related entity from `{}<..>`; add `target = \"Entity\"` to #[eagerload(...)]",
                    wrapper
                ))
                .with_span(&self.ty));
            }
            (None, None) => related.inner.clone(),
        };

        Ok(Some(RelationshipInfo {
            name: ident.to_string(),
            target,
            uselist: self.uselist.unwrap_or(related.is_collection),
        }))
    }
}

impl EntityReceiver {
    pub fn to_entity_info(self) -> darling::Result<EntityInfo> {
        let entity_name = self.entity_name.unwrap_or_else(|| self.ident.to_string());
        let table_name = self.table_name.unwrap_or_else(|| self.ident.to_string().to_case(Case::Snake));

        let fields = self.data.take_struct().ok_or_else(|| darling::Error::custom("Expected struct"))?.fields;

        let mut errors = darling::Error::accumulator();
        let relationships: Vec<RelationshipInfo> = fields
            .into_iter()
            .filter_map(|field| errors.handle(field.to_relationship_info()).flatten())
            .collect();
        errors.finish()?;

        Ok(EntityInfo { struct_name: self.ident, entity_name, table_name, relationships })
    }
}

#[proc_macro_derive(Entity, attributes(eagerload))]
pub fn derive_entity(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    let entity_info = match EntityReceiver::from_derive_input(&input).and_then(EntityReceiver::to_entity_info) {
        Ok(info) => info,
        Err(e) => return e.write_errors().into(),
    };

    let expanded = impl_entity(&entity_info);
    proc_macro::TokenStream::from(expanded)
}

fn impl_entity(entity_info: &EntityInfo) -> TokenStream2 {
    let name = &entity_info.struct_name;
    let entity_name = &entity_info.entity_name;
    let table_name = &entity_info.table_name;

    let relationships: Vec<_> = entity_info
        .relationships
        .iter()
        .map(|rel| {
            let rel_name = &rel.name;
            let target = &rel.target;
            let uselist = rel.uselist;
            quote! {
                eagerload::Relationship::new(
                    #rel_name,
                    <#target as eagerload::EntityTrait>::entity_name(),
                    #uselist,
                )
            }
        })
        .collect();

    quote! {
        impl eagerload::EntityTrait for #name {
            fn entity_name() -> &'static str {
                #entity_name
            }

            fn table_name() -> &'static str {
                #table_name
            }

            fn relationships() -> Vec<eagerload::Relationship> {
                vec![#(#relationships),*]
            }
        }
    }
}

struct RelatedType<'a> {
    inner:           &'a Type,
    is_collection:   bool,
    /// A generic container other than `Vec`, `Option` or a smart pointer.
    unknown_wrapper: Option<String>,
}

/// Strip smart pointers and containers down to the related entity type.
fn unwrap_related_type(ty: &Type) -> RelatedType<'_> {
    let mut current = ty;
    let mut is_collection = false;

    while let Some((wrapper, inner)) = single_generic_argument(current) {
        match wrapper.as_str() {
            "Vec" => is_collection = true,
            "Option" | "Box" | "Arc" | "Rc" => {}
            _ => return RelatedType { inner: current, is_collection, unknown_wrapper: Some(wrapper) },
        }
        current = inner;
    }

    RelatedType { inner: current, is_collection, unknown_wrapper: None }
}

fn single_generic_argument(ty: &Type) -> Option<(String, &Type)> {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return Some((segment.ident.to_string(), inner));
                }
            }
        }
    }
    None
}
