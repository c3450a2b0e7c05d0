use std::path::PathBuf;
use std::process::ExitCode;

use boxmodel::prelude::*;

const USAGE: &str = "\
Usage: theme_gallery <command>

Commands:
  list                  List presets and user themes
  search <query>        Find themes by name
  show <name>           Print every property of a theme
  diff <a> <b>          Print the properties where two themes differ
  export <name> <dir>   Save a theme as <dir>/<name>.theme
  current               Show the theme the settings select for each scheme";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let mut resolver = ThemeResolver::new();
    match ThemeDirectory::user() {
        Ok(dir) => match smol::block_on(dir.load_into(&mut resolver)) {
            Ok(report) => log::debug!("Loaded {} user themes", report.loaded.len()),
            Err(e) => log::warn!("Could not load user themes: {}", e),
        },
        Err(e) => log::warn!("No user theme directory: {}", e),
    }

    let result = match args.as_slice() {
        ["list"] => {
            list(&resolver);
            Ok(())
        },
        ["search", query] => {
            for name in resolver.search(query) {
                println!("{}", name);
            }
            Ok(())
        },
        ["show", name] => show(&resolver, name),
        ["diff", a, b] => diff(&resolver, a, b),
        ["export", name, dir] => export(&resolver, name, PathBuf::from(dir)),
        ["current"] => current(resolver),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn list(resolver: &ThemeResolver) {
    println!("Presets ({}):", resolver.presets().len());
    for name in resolver.presets().names() {
        println!("  {}", name);
    }

    let user: Vec<&str> = resolver.user_themes().collect();
    if !user.is_empty() {
        println!("User themes ({}):", user.len());
        for name in user {
            println!("  {}", name);
        }
    }
}

fn show(resolver: &ThemeResolver, name: &str) -> ThemeResult<()> {
    let theme = resolver.resolve(name)?;
    println!("{}", name);
    for property in ThemeProperty::ALL {
        println!("  {:<28} {}", property.as_str(), theme.property(property));
    }
    Ok(())
}

fn diff(resolver: &ThemeResolver, a: &str, b: &str) -> ThemeResult<()> {
    let first = resolver.resolve(a)?;
    let second = resolver.resolve(b)?;
    for property in first.diff(&second) {
        println!(
            "  {:<28} {:<12} {}",
            property.as_str(),
            first.property(property).to_string(),
            second.property(property)
        );
    }
    Ok(())
}

fn export(resolver: &ThemeResolver, name: &str, dir: PathBuf) -> ThemeResult<()> {
    let theme = resolver.resolve(name)?;
    let path = boxmodel::theme::file::save_theme_as(&theme, dir, name)?;
    println!("Saved {}", path.display());
    Ok(())
}

fn current(resolver: ThemeResolver) -> ThemeResult<()> {
    let config = match smol::block_on(SettingsRegistry::new()) {
        Ok(settings) => {
            let mut config = settings.theme_config;
            config.merge(ThemeConfig::from_env_or_default());
            config
        },
        Err(e) => {
            log::warn!("Could not load settings: {}", e);
            ThemeConfig::from_env_or_default()
        },
    };

    let mut manager = ThemeManager::with_resolver(resolver, config, ColorScheme::Light)?;
    println!("light: {}", manager.current_name());
    manager.apply_color_scheme(ColorScheme::Dark)?;
    println!("dark:  {}", manager.current_name());
    Ok(())
}
