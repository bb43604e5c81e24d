use heck::ToSnakeCase;

#[derive(Debug)]
pub(crate) struct Name {
    /// Identifier without the `r#` prefix
    pub(crate) raw: String,

    /// snake_case form, used for column names and default foreign keys
    pub(crate) snake: String,

    /// Field or type identifier as written
    pub(crate) ident: syn::Ident,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident) -> Self {
        let ident_str = ident.to_string();
        let raw = ident_str.strip_prefix("r#").unwrap_or(&ident_str).to_string();

        Self {
            snake: raw.to_snake_case(),
            raw,
            ident: ident.clone(),
        }
    }

    /// Table name derived from a type name: `UserProfile` becomes `user_profiles`.
    pub(crate) fn table(&self) -> String {
        let mut parts: Vec<&str> = self.snake.split('_').collect();
        let last = parts.pop().unwrap_or_default();
        let plural = pluralizer::pluralize(last, 2, false);

        parts.push(&plural);
        parts.join("_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    fn name(src: &str) -> Name {
        Name::from_ident(&syn::Ident::new(src, Span::call_site()))
    }

    #[test]
    fn snake_case() {
        assert_eq!(name("UserProfile").snake, "user_profile");
        assert_eq!(name("created_at").snake, "created_at");
        assert_eq!(
            Name::from_ident(&syn::Ident::new_raw("type", Span::call_site())).snake,
            "type"
        );
    }

    #[test]
    fn table_pluralizes_last_word() {
        assert_eq!(name("User").table(), "users");
        assert_eq!(name("Address").table(), "addresses");
        assert_eq!(name("UserProfile").table(), "user_profiles");
    }
}
