use crate::ui::tui::Tui;

/// Panic and eyre hooks that put the terminal back into a usable state
/// before the report is printed.
pub fn install_hooks() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = Tui::restore();
        panic_hook(panic_info);
    }));

    eyre_hook.install()?;
    Ok(())
}
