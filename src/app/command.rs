use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::color::HexColor;
use crate::theme::{AccentColor, CustomColorsPatch, FontFamily, FontSize, ThemeName};

#[derive(Debug, Parser)]
#[command(
    name = "tintkit",
    about = "Theme and color palette engine for dashboard consoles",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The selected command; no subcommand means `show`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Show)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the resolved theme as JSON.
    Show,

    /// Print utility class names for the theme.
    Classes,

    /// Print inline style bundles for the theme.
    Styles,

    /// Print the root stylesheet.
    Css,

    /// Print available themes, accents and fonts.
    List,

    /// Select a preset theme or `custom`.
    #[command(name = "theme")]
    SetTheme {
        #[arg(value_name = "NAME")]
        theme: ThemeName,
    },

    /// Select the accent color.
    #[command(name = "accent")]
    SetAccent {
        #[arg(value_name = "NAME")]
        accent: AccentColor,
    },

    /// Select the font family.
    #[command(name = "font")]
    SetFont {
        #[arg(value_name = "NAME")]
        font: FontFamily,
    },

    /// Select the font size: small, medium, large or xlarge.
    #[command(name = "font-size")]
    SetFontSize {
        #[arg(value_name = "SIZE")]
        size: FontSize,
    },

    /// Set custom palette colors and switch to the custom theme.
    #[command(name = "custom")]
    SetCustomColors {
        /// `<field>=<hex>` where field is background, surface, card or accent.
        #[arg(required = true, value_name = "FIELD=HEX", value_parser = parse_custom_assignment)]
        assignments: Vec<CustomAssignment>,
    },

    /// Turn high-contrast mode on or off.
    #[command(name = "high-contrast")]
    SetHighContrast {
        #[arg(action = ArgAction::Set, value_name = "on|off", value_parser = parse_switch)]
        enabled: bool,
    },

    /// Print the WCAG contrast ratio of two colors.
    Contrast { fg: HexColor, bg: HexColor },
}

impl Command {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::SetTheme { .. }
                | Command::SetAccent { .. }
                | Command::SetFont { .. }
                | Command::SetFontSize { .. }
                | Command::SetCustomColors { .. }
                | Command::SetHighContrast { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CustomField {
    Background,
    Surface,
    Card,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAssignment {
    pub field: CustomField,
    pub color: HexColor,
}

/// Folds assignments into one patch; later assignments to a field win.
pub fn custom_patch(assignments: &[CustomAssignment]) -> CustomColorsPatch {
    let mut patch = CustomColorsPatch::default();
    for CustomAssignment { field, color } in assignments {
        let slot = match field {
            CustomField::Background => &mut patch.background,
            CustomField::Surface => &mut patch.surface,
            CustomField::Card => &mut patch.card,
            CustomField::Accent => &mut patch.accent,
        };
        *slot = Some(color.clone());
    }
    patch
}

fn parse_custom_assignment(value: &str) -> Result<CustomAssignment, String> {
    let (field, hex) = value
        .split_once('=')
        .ok_or_else(|| format!("expected <field>=<hex>, got {value:?}"))?;
    let field = <CustomField as ValueEnum>::from_str(field.trim(), true)?;
    let color = hex.parse::<HexColor>().map_err(|err| err.to_string())?;
    Ok(CustomAssignment { field, color })
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(format!("expected on or off, got {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("tintkit").chain(args.iter().copied()))
            .map(Cli::into_command)
    }

    #[test]
    fn empty_args_default_to_show() {
        assert_eq!(parse(&[]).unwrap(), Command::Show);
    }

    #[test]
    fn parses_enum_setters() {
        assert_eq!(
            parse(&["theme", "Dark"]).unwrap(),
            Command::SetTheme {
                theme: ThemeName::Dark
            }
        );
        assert_eq!(
            parse(&["accent", "blue"]).unwrap(),
            Command::SetAccent {
                accent: AccentColor::Blue
            }
        );
        assert_eq!(
            parse(&["font-size", "xlarge"]).unwrap(),
            Command::SetFontSize {
                size: FontSize::Xlarge
            }
        );
        assert_eq!(
            parse(&["high-contrast", "on"]).unwrap(),
            Command::SetHighContrast { enabled: true }
        );
        assert_eq!(
            parse(&["high-contrast", "off"]).unwrap(),
            Command::SetHighContrast { enabled: false }
        );
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = parse(&["theme", "sepia"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_custom_assignments() {
        let command = parse(&["custom", "background=#111827", "accent=F97316"]).unwrap();
        let Command::SetCustomColors { assignments } = command else {
            panic!("expected custom colors command");
        };
        let patch = custom_patch(&assignments);
        assert_eq!(patch.background.unwrap().as_str(), "#111827");
        assert_eq!(patch.accent.unwrap().as_str(), "#f97316");
        assert!(patch.surface.is_none());
        assert!(patch.card.is_none());
    }

    #[test]
    fn custom_rejects_invalid_hex_and_fields() {
        for args in [
            &["custom", "background=#12"][..],
            &["custom", "border=#121212"][..],
            &["custom", "background"][..],
        ] {
            let err = parse(args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "{args:?}");
        }
        let err = parse(&["custom"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(
            parse(&["theme"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["show", "extra"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["contrast", "#000000"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["high-contrast", "maybe"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn help_is_generated() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("high-contrast"));
    }

    #[test]
    fn mutation_commands_are_flagged() {
        assert!(Command::SetHighContrast { enabled: false }.is_mutation());
        assert!(!Command::Css.is_mutation());
    }
}
