//! CLI command implementations
//!
//! Every command writes its report to a caller-supplied writer so the
//! binary and the integration tests share one code path.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Serialize;
use swatch_app::config::{open_storage, OutputFormat, Settings};
use swatch_app::{
    find_preset, stored_theme_id, PreferenceStorage, Stylesheet, ThemeChanged, ThemeManager,
    ThemePreset, DEFAULT_THEME_ID, PREFERENCE_KEY, THEME_PRESETS,
};
use swatch_core::prelude::*;
use swatch_core::{ButtonSize, ButtonVariant, DesignTokens, HeadingLevel, TextSize, TextWeight};

use crate::headless::HeadlessEvent;

/// Resolved runtime state shared by all commands
pub struct Context {
    pub storage: Box<dyn PreferenceStorage>,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(storage: Box<dyn PreferenceStorage>, format: OutputFormat) -> Self {
        Self { storage, format }
    }

    /// Build from loaded settings; `json` forces NDJSON output
    pub fn from_settings(settings: &Settings, json: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            settings.output.format
        };
        Self::new(open_storage(&settings.storage), format)
    }
}

/// Options for `apply` and `init`
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Persist the selection
    pub save: bool,
    /// Stylesheet to update in place instead of printing CSS
    pub stylesheet: Option<PathBuf>,
}

// ─────────────────────────────────────────────────────────────────────────────
// list / current / show / props
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PresetListing<'a> {
    #[serde(flatten)]
    preset: &'a ThemePreset,
    default: bool,
    current: bool,
}

pub fn list(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let current = stored_theme_id(ctx.storage.as_ref());

    match ctx.format {
        OutputFormat::Json => {
            let listings: Vec<PresetListing<'_>> = THEME_PRESETS
                .iter()
                .map(|preset| PresetListing {
                    preset,
                    default: preset.id == DEFAULT_THEME_ID,
                    current: preset.id == current,
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string(&listings)?)?;
        }
        OutputFormat::Css => {
            for preset in THEME_PRESETS {
                let marker = if preset.id == current { "*" } else { " " };
                let default = if preset.id == DEFAULT_THEME_ID {
                    " (default)"
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{} {:<16} {:<16} {}{}",
                    marker, preset.id, preset.name, preset.description, default
                )?;
            }
        }
    }
    Ok(())
}

pub fn current(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let current = stored_theme_id(ctx.storage.as_ref());
    match ctx.format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "themeId": current });
            writeln!(out, "{}", value)?;
        }
        OutputFormat::Css => writeln!(out, "{}", current)?,
    }
    Ok(())
}

/// Print a preset with the design tokens derived from it
pub fn show(theme_id: &str, out: &mut dyn Write) -> Result<()> {
    let preset = find_preset(theme_id).ok_or_else(|| Error::unknown_theme(theme_id))?;

    #[derive(Serialize)]
    struct Shown<'a> {
        preset: &'a ThemePreset,
        tokens: DesignTokens,
    }

    let shown = Shown {
        preset,
        tokens: DesignTokens {
            colors: preset.colors.to_color_tokens(),
            ..DesignTokens::default()
        },
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&shown)?)?;
    Ok(())
}

/// Print the UI prop enumerations consumers may pass to components
pub fn props(out: &mut dyn Write) -> Result<()> {
    fn line(out: &mut dyn Write, name: &str, values: Vec<&str>) -> Result<()> {
        writeln!(out, "{:<15} {}", name, values.join(" | "))?;
        Ok(())
    }

    line(out, "ButtonVariant", ButtonVariant::ALL.iter().map(|v| v.as_str()).collect())?;
    line(out, "ButtonSize", ButtonSize::ALL.iter().map(|v| v.as_str()).collect())?;
    line(out, "HeadingLevel", HeadingLevel::ALL.iter().map(|v| v.as_str()).collect())?;
    line(out, "TextSize", TextSize::ALL.iter().map(|v| v.as_str()).collect())?;
    line(out, "TextWeight", TextWeight::ALL.iter().map(|v| v.as_str()).collect())?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// apply / init
// ─────────────────────────────────────────────────────────────────────────────

/// Apply `theme_id` (optionally persisting it) and report the result
pub fn apply(
    ctx: &mut Context,
    theme_id: &str,
    opts: &ApplyOptions,
    out: &mut dyn Write,
) -> Result<()> {
    run_apply(ctx, opts, out, |manager| {
        if opts.save {
            manager.save_theme_preference(theme_id)
        } else {
            manager.apply_theme(theme_id)
        }
    })
}

/// Apply the stored preference and report the result
pub fn init(ctx: &mut Context, opts: &ApplyOptions, out: &mut dyn Write) -> Result<()> {
    let opts = ApplyOptions {
        save: false,
        stylesheet: opts.stylesheet.clone(),
    };
    run_apply(ctx, &opts, out, |manager| manager.init_theme())
}

fn run_apply<F>(ctx: &mut Context, opts: &ApplyOptions, out: &mut dyn Write, f: F) -> Result<()>
where
    F: FnOnce(&mut ThemeManager<Stylesheet, &mut dyn PreferenceStorage>) -> &'static ThemePreset,
{
    let initial = match &opts.stylesheet {
        Some(path) => read_stylesheet(path)?,
        None => Stylesheet::new(),
    };

    let changes = Rc::new(RefCell::new(Vec::<ThemeChanged>::new()));
    let log = Rc::clone(&changes);

    let storage: &mut dyn PreferenceStorage = ctx.storage.as_mut();
    let mut manager = ThemeManager::new(initial, storage);
    manager
        .events_mut()
        .subscribe(move |e| log.borrow_mut().push(e.clone()));

    let preset = f(&mut manager);
    let (sheet, storage) = manager.into_parts();

    let changes = changes.take();
    let requested = changes
        .last()
        .map(|c| c.requested_id.as_str())
        .unwrap_or(preset.id);
    let saved = opts.save
        && storage.is_available()
        && storage.get(PREFERENCE_KEY).as_deref() == Some(requested);

    if let Some(path) = &opts.stylesheet {
        fs::write(path, sheet.to_css())
            .with_context(|| format!("Failed to write stylesheet {}", path.display()))?;
        info!("Wrote {} to {}", preset.id, path.display());
    }

    match ctx.format {
        OutputFormat::Json => {
            for change in &changes {
                HeadlessEvent::from(change).write_to(out)?;
            }
            if saved {
                HeadlessEvent::preference_saved(requested).write_to(out)?;
            } else if opts.save {
                HeadlessEvent::error("Theme preference was not saved", false).write_to(out)?;
            }
        }
        OutputFormat::Css => match &opts.stylesheet {
            Some(path) => writeln!(
                out,
                "Applied {} ({}) to {}",
                preset.name,
                preset.id,
                path.display()
            )?,
            None => out.write_all(sheet.to_css().as_bytes())?,
        },
    }
    Ok(())
}

fn read_stylesheet(path: &Path) -> Result<Stylesheet> {
    if !path.exists() {
        return Ok(Stylesheet::new());
    }
    let css = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stylesheet {}", path.display()))?;
    Ok(Stylesheet::parse(&css))
}
