//! Locale-keyed message catalog.
//!
//! Every user-facing string lives here, keyed by language and message
//! identifier. Layout code asks the catalog for a literal and never
//! branches on language itself, so adding a language means extending the
//! matches in this module only.

use crate::registry::ValueKind;

/// The language help menus and parse diagnostics are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
}

/// Identifier for a fixed menu string.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Msg {
    /// Header above the usage line.
    UsageHeader,
    /// Punctuation appended to a subsection title.
    SubsectionColon,
    /// Separator between a quoted choice label and its description.
    ChoiceSeparator,
    /// Label introducing a parameter's default values.
    DefaultLabel,
}

pub(crate) fn label(lang: Lang, msg: Msg) -> &'static str {
    match (lang, msg) {
        (Lang::En, Msg::UsageHeader) => "USAGE:",
        (Lang::Fr, Msg::UsageHeader) => "UTILISATION :",
        (Lang::En, Msg::SubsectionColon) => ":",
        (Lang::Fr, Msg::SubsectionColon) => " :",
        (Lang::En, Msg::ChoiceSeparator) => ": ",
        (Lang::Fr, Msg::ChoiceSeparator) => " : ",
        (Lang::En, Msg::DefaultLabel) => "Default:",
        (Lang::Fr, Msg::DefaultLabel) => "Défaut :",
    }
}

pub(crate) fn unknown_parameter(lang: Lang, token: &str) -> String {
    match lang {
        Lang::En => format!("unknown parameter \"{}\"", token),
        Lang::Fr => format!("erreur : paramètre \"{}\" inconnu", token),
    }
}

pub(crate) fn missing_values(lang: Lang, name: &str, expected: usize) -> String {
    match lang {
        Lang::En => format!("error: parameter \"{}\" expects {} values", name, expected),
        Lang::Fr => format!("erreur : le paramètre \"{}\" attend {} valeurs", name, expected),
    }
}

pub(crate) fn invalid_value(lang: Lang, name: &str, token: &str, kind: ValueKind) -> String {
    match lang {
        Lang::En => format!(
            "parameter \"{}\" expects {} value, received \"{}\"",
            name,
            kind_noun(Lang::En, kind),
            token
        ),
        Lang::Fr => format!(
            "le paramètre \"{}\" attend une valeur {}, et a reçu \"{}\"",
            name,
            kind_noun(Lang::Fr, kind),
            token
        ),
    }
}

fn kind_noun(lang: Lang, kind: ValueKind) -> &'static str {
    match (lang, kind) {
        (Lang::En, ValueKind::Integer) => "an integer",
        (Lang::En, ValueKind::Real) => "a real",
        (Lang::En, ValueKind::ExtendedReal) => "an extended-precision real",
        (Lang::En, _) => "a text",
        (Lang::Fr, ValueKind::Integer) => "entière",
        (Lang::Fr, ValueKind::Real) => "réelle",
        (Lang::Fr, ValueKind::ExtendedReal) => "réelle étendue",
        (Lang::Fr, _) => "texte",
    }
}
