use log::LevelFilter;

/// Dependency targets that flood the output at info/debug
const NOISY_TARGETS: &[&str] = &[
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "cosmic_text",
    "iced_wgpu",
    "iced_winit",
    "winit",
    "reqwest",
    "hyper_util",
    "rustls",
];

pub fn setup(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    for target in NOISY_TARGETS {
        dispatch = dispatch.level_for(*target, level.min(LevelFilter::Warn));
    }

    dispatch.chain(std::io::stdout()).apply()
}
