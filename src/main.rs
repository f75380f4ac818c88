use block_catch::config::resolve_game_config;
use block_catch::host::build_windowed_app;

fn main() {
    // Resolve assets/game.toml and BLOCK_CATCH_RESTART before the app exists so
    // every plugin sees the final values.
    let config = resolve_game_config();
    println!("Restart policy: {:?}", config.restart_policy);

    build_windowed_app(config).run();
}
