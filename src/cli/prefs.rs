//! Preference and toggle CLI commands.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::models::{ThemePalette, ToggleInfo};
use crate::services::PreferenceManager;

/// Show drawer preferences
#[derive(Args, Debug)]
pub struct PrefsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON output of `prefs`
#[derive(Serialize, Debug)]
pub struct PrefsOutput {
    /// Whether the drawer replacement is enabled
    pub enabled: bool,
    /// Theme name
    pub theme: String,
    /// Whether the theme is a dark variant
    pub using_dark: bool,
    /// Theme colors as hex strings
    pub colors: ColorsOutput,
    /// Carrier name
    pub carrier: String,
}

/// Theme colors as hex strings
#[derive(Serialize, Debug)]
pub struct ColorsOutput {
    /// Background color
    pub background: String,
    /// Highlight color
    pub highlight: String,
    /// Text color
    pub text: String,
}

impl From<ThemePalette> for ColorsOutput {
    fn from(palette: ThemePalette) -> Self {
        Self {
            background: palette.background.to_hex(),
            highlight: palette.highlight.to_hex(),
            text: palette.text.to_hex(),
        }
    }
}

impl PrefsArgs {
    /// Execute prefs command
    pub fn execute(&self, prefs: &PreferenceManager) -> Result<()> {
        let output = collect_prefs(prefs);
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize preferences")?
            );
        } else {
            print!("{}", render_prefs(&output));
        }
        Ok(())
    }
}

/// Gathers the preference view from one snapshot of `prefs`.
pub fn collect_prefs(prefs: &PreferenceManager) -> PrefsOutput {
    let state = prefs.state();
    let theme = state.current_theme;
    PrefsOutput {
        enabled: state.enabled,
        theme: theme.name().to_string(),
        using_dark: theme.is_dark(),
        colors: theme.palette().into(),
        carrier: prefs.carrier_name(),
    }
}

/// Human-readable rendering of the preference view.
pub fn render_prefs(output: &PrefsOutput) -> String {
    let carrier = if output.carrier.is_empty() {
        "(none)"
    } else {
        output.carrier.as_str()
    };

    let mut text = String::new();
    text.push_str("Drawer Preferences\n");
    text.push_str("==================\n\n");
    text.push_str(&format!(
        "  Enabled: {}\n",
        if output.enabled { "yes" } else { "no" }
    ));
    text.push_str(&format!(
        "  Theme: {}{}\n",
        output.theme,
        if output.using_dark { " (dark)" } else { "" }
    ));
    text.push_str(&format!("  Background: {}\n", output.colors.background));
    text.push_str(&format!("  Highlight: {}\n", output.colors.highlight));
    text.push_str(&format!("  Text: {}\n", output.colors.text));
    text.push_str(&format!("  Carrier: {carrier}\n"));
    text
}

/// List enabled and disabled toggles
#[derive(Args, Debug)]
pub struct TogglesArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON output of `toggles`
#[derive(Serialize, Debug)]
pub struct TogglesOutput {
    /// Enabled toggles in display order
    pub enabled: Vec<ToggleInfo>,
    /// Disabled toggles in registry order
    pub disabled: Vec<ToggleInfo>,
}

impl TogglesArgs {
    /// Execute toggles command
    pub fn execute(&self, prefs: &PreferenceManager) -> Result<()> {
        let output = collect_toggles(prefs);
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize toggles")?
            );
        } else {
            print!("{}", render_toggles(&output));
        }
        Ok(())
    }
}

/// Gathers enabled and disabled toggles with their metadata.
///
/// A toggle that disappears between listing and lookup is left out.
pub fn collect_toggles(prefs: &PreferenceManager) -> TogglesOutput {
    let (enabled, disabled) = prefs.partition_toggles();
    let lookup = |ids: Vec<String>| -> Vec<ToggleInfo> {
        ids.iter()
            .filter_map(|id| prefs.toggle_info_for_identifier(id))
            .collect()
    };

    TogglesOutput {
        enabled: lookup(enabled),
        disabled: lookup(disabled),
    }
}

/// Human-readable rendering of the toggle lists.
pub fn render_toggles(output: &TogglesOutput) -> String {
    let mut text = String::new();
    for (title, toggles) in [("Enabled", &output.enabled), ("Disabled", &output.disabled)] {
        text.push_str(&format!("{title} ({}):\n", toggles.len()));
        if toggles.is_empty() {
            text.push_str("  (none)\n");
        }
        for toggle in toggles {
            text.push_str(&format!("  {} [{}]\n", toggle.display_name, toggle.identifier));
        }
    }
    text
}
