use clap::Args;
use winnudge_core::settings::SettingsStore;

use super::fail;
use crate::panel::describe_settings;

#[derive(Args)]
pub struct SetArgs {
    /// Theme name; "dark" and "light" also set both colors
    #[arg(long)]
    pub name: Option<String>,
    /// Background color as #RRGGBB
    #[arg(long)]
    pub background: Option<String>,
    /// Font color as #RRGGBB
    #[arg(long)]
    pub font: Option<String>,
}

fn store() -> SettingsStore {
    SettingsStore::open_default().unwrap_or_else(|e| fail(e))
}

pub fn show() {
    println!("{}", describe_settings(&store().load()));
}

pub fn set(args: &SetArgs) {
    if args.name.is_none() && args.background.is_none() && args.font.is_none() {
        fail("nothing to change; pass --name, --background or --font");
    }

    let store = store();
    let mut settings = store.load();
    if let Some(name) = &args.name {
        settings.set_theme(name);
    }
    if let Some(background) = &args.background {
        settings.set_background(background).unwrap_or_else(|e| fail(e));
    }
    if let Some(font) = &args.font {
        settings.set_font(font).unwrap_or_else(|e| fail(e));
    }

    if let Err(e) = store.save(&settings) {
        fail(format!("could not write {}: {e}", store.path().display()));
    }
    println!("{}", describe_settings(&settings));
}
