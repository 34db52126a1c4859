//! Help-menu rendering.
//!
//! [`HelpMenu`] borrows the registry and implements [`fmt::Display`], so
//! the menu can be printed, captured into a string or embedded in other
//! output. Rendering is read-only: the same registry renders to the same
//! bytes every time.

use std::fmt;

use crate::messages::{label, Msg};
use crate::registry::{ParamDef, Parameters, ValueStore};
use crate::wrap::wrap;

/// A help menu ready to be formatted.
///
/// Created by [`Parameters::help`]. The usage and description sections
/// can be toggled off; the parameter list always prints.
///
/// # Examples
///
/// ```rust
/// # fn main() -> anyhow::Result<()> {
/// let mut params = declargs::Parameters::new(declargs::Config::default());
/// params.set_usage("prog [--help]");
/// params.define_flag("help", "Print this menu.")?;
///
/// let menu = params.help().usage(false).to_string();
/// assert!(!menu.contains("USAGE:"));
/// assert!(menu.contains("--help"));
/// # Ok(()) }
/// ```
pub struct HelpMenu<'a> {
    params: &'a Parameters,
    print_usage: bool,
    print_description: bool,
}

impl Parameters {
    /// Render the help menu built from the registry.
    pub fn help(&self) -> HelpMenu<'_> {
        HelpMenu {
            params: self,
            print_usage: true,
            print_description: true,
        }
    }
}

impl<'a> HelpMenu<'a> {
    /// Whether to print the usage section. Defaults to on.
    pub fn usage(mut self, print: bool) -> Self {
        self.print_usage = print;
        self
    }

    /// Whether to print the program description. Defaults to on.
    pub fn description(mut self, print: bool) -> Self {
        self.print_description = print;
        self
    }
}

impl<'a> fmt::Display for HelpMenu<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params;
        let cfg = &p.config;

        if self.print_description {
            if let Some(description) = &p.description {
                writeln!(f)?;

                for line in wrap(description, 0, cfg.terminal_width) {
                    writeln!(f, "{}", line)?;
                }
            }
        }

        if self.print_usage {
            if let Some(usage) = &p.usage {
                writeln!(f)?;
                writeln!(f, "{}", label(cfg.lang, Msg::UsageHeader))?;
                writeln!(f)?;
                writeln!(f, "{:indent$}{}", "", usage, indent = cfg.params_indent)?;
                writeln!(f)?;
            }
        }

        for (at, def) in p.params.iter().enumerate() {
            for (title, index) in &p.subsections {
                if *index == at {
                    writeln!(f)?;
                    writeln!(f, "{}{}", title, label(cfg.lang, Msg::SubsectionColon))?;
                    writeln!(f)?;
                }
            }

            self.fmt_parameter(f, def)?;
        }

        Ok(())
    }
}

impl<'a> HelpMenu<'a> {
    fn fmt_parameter(&self, f: &mut fmt::Formatter<'_>, def: &ParamDef) -> fmt::Result {
        let cfg = &self.params.config;

        let mut use_line = format!("{:indent$}{}", "", def.name(), indent = cfg.params_indent);

        for slot in def.slot_names() {
            use_line.push_str(" <");
            use_line.push_str(slot);
            use_line.push('>');
        }

        // A use string crowding the description column pushes the
        // description to its own lines.
        let use_len = char_len(&use_line);
        let desc_on_new_line = use_len + cfg.column_gap > cfg.description_indent;

        if desc_on_new_line {
            writeln!(f, "{}", use_line)?;
        } else {
            write!(f, "{}{:pad$}", use_line, "", pad = cfg.description_indent - use_len)?;
        }

        let lines = wrap(def.description(), cfg.description_indent, cfg.terminal_width);

        for (at, line) in lines.iter().enumerate() {
            if at > 0 || desc_on_new_line {
                write!(f, "{:indent$}", "", indent = cfg.description_indent)?;
            }

            writeln!(f, "{}", line)?;
        }

        if let Some(choices) = def.choices() {
            let separator = label(cfg.lang, Msg::ChoiceSeparator);

            for (choice, description) in choices {
                write!(
                    f,
                    "{:indent$}\"{}\"{}",
                    "",
                    choice,
                    separator,
                    indent = cfg.description_indent + cfg.choice_indent
                )?;

                // Continuation lines align under the first description
                // character, past the quoted label and separator.
                let inline = 2 + char_len(choice) + char_len(separator);
                let indent = cfg.description_indent + cfg.choice_indent + inline;

                for (at, line) in wrap(description, indent, cfg.terminal_width).iter().enumerate() {
                    if at > 0 {
                        write!(f, "{:indent$}", "", indent = indent)?;
                    }

                    writeln!(f, "{}", line)?;
                }
            }
        }

        if def.show_default() && !matches!(def.defaults(), ValueStore::Flag) {
            writeln!(
                f,
                "{:indent$}{} {}",
                "",
                label(cfg.lang, Msg::DefaultLabel),
                format_defaults(def.defaults()),
                indent = cfg.description_indent
            )?;
        }

        writeln!(f)
    }
}

/// Comma-join the default values; text and choice values are quoted,
/// numeric ones are not.
fn format_defaults(store: &ValueStore) -> String {
    fn join<T, F>(values: &[T], format: F) -> String
    where
        F: Fn(&T) -> String,
    {
        values.iter().map(format).collect::<Vec<_>>().join(", ")
    }

    match store {
        ValueStore::Flag => String::new(),
        ValueStore::Integer(v) => join(v, |x| x.to_string()),
        ValueStore::Real(v) => join(v, |x| x.to_string()),
        ValueStore::ExtendedReal(v) => join(v, |x| x.to_string()),
        ValueStore::Text(v) | ValueStore::Choice(v) => join(v, |s| format!("\"{}\"", s)),
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use crate::{Config, Lang, Parameters};

    fn sample(lang: Lang) -> Parameters {
        let mut params = Parameters::new(Config {
            terminal_width: 60,
            column_gap: 2,
            description_indent: 24,
            params_indent: 4,
            choice_indent: 4,
            lang,
        });

        params.set_description(
            "Compute the sum of two integers provided on the command line.",
        );
        params.set_usage("sum [--help] --values <a> <b>");

        params.insert_subsection("General");
        params.define_flag("help", "Print this help menu.").unwrap();

        params.insert_subsection("Input");
        params
            .define_values(
                "values",
                &["a", "b"],
                vec![0i64, 0],
                "The two integers to add together, in any order.",
                true,
            )
            .unwrap();
        params
            .define_choice(
                "mode",
                "mode",
                "fast",
                &[
                    ("fast", "Add the integers as quickly as possible."),
                    ("slow", "Take a scenic route through the addition."),
                ],
                "How the sum is computed.",
                true,
            )
            .unwrap();

        params
    }

    #[test]
    fn rendering_is_idempotent() {
        let params = sample(Lang::En);
        assert_eq!(params.help().to_string(), params.help().to_string());
    }

    #[test]
    fn every_line_fits_the_terminal() {
        let params = sample(Lang::En);
        let menu = params.help().to_string();

        for line in menu.lines() {
            assert!(
                line.chars().count() <= 60,
                "line exceeds the terminal width: {:?}",
                line
            );
        }
    }

    #[test]
    fn sections_print_in_declaration_order() {
        let params = sample(Lang::En);
        let menu = params.help().to_string();

        let general = menu.find("\nGeneral:\n").unwrap();
        let help = menu.find("\n    --help ").unwrap();
        let input = menu.find("\nInput:\n").unwrap();
        let values = menu.find("\n    --values <a> <b>").unwrap();

        assert!(general < help);
        assert!(help < input);
        assert!(input < values);
    }

    #[test]
    fn usage_section_is_indented_under_its_header() {
        let params = sample(Lang::En);
        let menu = params.help().to_string();

        assert!(menu.contains("USAGE:"));
        assert!(menu.contains("\n    sum [--help] --values <a> <b>\n"));
    }

    #[test]
    fn toggles_suppress_their_sections() {
        let params = sample(Lang::En);
        let menu = params.help().usage(false).description(false).to_string();

        assert!(!menu.contains("USAGE:"));
        assert!(!menu.contains("Compute the sum"));
        assert!(menu.contains("--values"));
    }

    #[test]
    fn defaults_are_quoted_only_for_text_kinds() {
        let params = sample(Lang::En);
        let menu = params.help().to_string();

        assert!(menu.contains("Default: 0, 0"));
        assert!(menu.contains("Default: \"fast\""));
    }

    #[test]
    fn choice_labels_are_quoted_and_described() {
        let params = sample(Lang::En);
        let menu = params.help().to_string();

        assert!(menu.contains("\"fast\": Add the integers"));
        assert!(menu.contains("\"slow\": Take a scenic"));
    }

    #[test]
    fn french_swaps_catalog_strings_not_layout() {
        let en = sample(Lang::En).help().to_string();
        let fr = sample(Lang::Fr).help().to_string();

        assert!(fr.contains("UTILISATION :"));
        assert!(fr.contains("Défaut : 0, 0"));
        assert!(fr.contains("\"fast\" : "));
        assert_eq!(en.lines().count(), fr.lines().count());
    }

    #[test]
    fn stacked_subsection_markers_all_print() {
        let mut params = Parameters::new(Config::default());
        params.insert_subsection("One");
        params.insert_subsection("Two");
        params.define_flag("x", "A flag.").unwrap();

        let menu = params.help().to_string();
        let one = menu.find("One:").unwrap();
        let two = menu.find("Two:").unwrap();
        let flag = menu.find("--x").unwrap();

        assert!(one < two && two < flag);
    }

    #[test]
    fn trailing_subsection_markers_render_nothing() {
        let mut params = sample(Lang::En);
        params.insert_subsection("Unused");

        assert!(!params.help().to_string().contains("Unused"));
    }

    #[test]
    fn narrow_terminals_never_drop_choice_descriptions() {
        // A long quoted label pushes the choice column past the terminal
        // width entirely; the description still has to come out.
        let mut params = Parameters::new(Config {
            terminal_width: 40,
            lang: Lang::En,
            ..Config::default()
        });
        params
            .define_choice(
                "paper",
                "size",
                "a-very-long-choice-label-x",
                &[("a-very-long-choice-label-x", "Twenty-six letters wide.")],
                "Pick a paper size.",
                false,
            )
            .unwrap();

        let menu = params.help().to_string();
        let squeezed: String = menu.chars().filter(|c| !c.is_whitespace()).collect();
        assert!(squeezed.contains("Twenty-sixletterswide."));
    }

    #[test]
    fn long_use_strings_push_the_description_to_its_own_line() {
        let mut params = sample(Lang::En);
        params
            .define_values(
                "a-very-long-parameter-name",
                &["value"],
                vec![0i64],
                "Needs its own line.",
                false,
            )
            .unwrap();

        let menu = params.help().to_string();
        assert!(menu.contains("    --a-very-long-parameter-name <value>\n"));
        assert!(menu.contains("                        Needs its own line.\n"));
    }
}
