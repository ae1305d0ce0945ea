use log::*;
use phongtrace::config::{parse_args, Command, Config};
use phongtrace::error::Result;
use phongtrace::session::Session;

fn run(config: Config) -> Result<()> {
    let mut session = Session::new(config.width, config.height).with_threads(config.render.nthread);
    session.set_light_x(config.light_x);
    session.set_bounce_limit(config.render.bounce_limit);
    session.set_mode(config.render.mode);
    info!(
        "light x {} with {} reflection(s)",
        session.light_x(),
        session.reflections()
    );

    let image = session.frame()?;
    image.write_png(&config.output)?;
    info!("wrote {}", config.output.display());
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("phongtrace");
    let command = match parse_args(program, &args[args.len().min(1)..]) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    match command {
        Command::Help(usage) => print!("{}", usage),
        Command::Render(config) => {
            if let Err(e) = run(config) {
                error!("{}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
