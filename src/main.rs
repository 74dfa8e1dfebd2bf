use intersection_plotter::command::{execute, parse_command, Command, HELP};
use intersection_plotter::config::{load_config, PlotToolConfig};
use intersection_plotter::diagnostics::ImageDescriptor;
use intersection_plotter::image::io::write_json_file;
use intersection_plotter::{Plotter, Session};
use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => interactive(),
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{}", usage());
            Ok(())
        }
        [config_path] => {
            let config = load_config(Path::new(config_path))?;
            batch(&config)
        }
        _ => Err(usage()),
    }
}

fn usage() -> String {
    "Usage: intersection_plotter [config.json]\n\nWithout arguments an interactive session reads commands from stdin."
        .to_string()
}

fn batch(config: &PlotToolConfig) -> Result<(), String> {
    let plotter = Plotter::new(config.plot_params());
    let mut session = config.to_session();
    let mut outcome = session.plot(&plotter);

    for line in &outcome.listing {
        println!("{line}");
    }

    let png = outcome
        .report
        .timings
        .time("export", || session.export(&plotter))?;
    png.write_to(&config.output.png)?;
    println!(
        "\nPlot written to {} ({}x{} px, {} dpi)",
        config.output.png.display(),
        png.width,
        png.height,
        png.dpi
    );

    if let Some(path) = &config.output.report_json {
        outcome.report.image = Some(ImageDescriptor {
            width: png.width,
            height: png.height,
            dpi: png.dpi,
            path: Some(config.output.png.display().to_string()),
        });
        write_json_file(path, &outcome.report)?;
        println!("JSON report written to {}", path.display());
    }
    Ok(())
}

fn interactive() -> Result<(), String> {
    let plotter = Plotter::default();
    let mut session = Session::default();
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();

    if prompt {
        println!("Intersection plotter: {}", session.section());
        println!("{HELP}");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("> ");
            io::stdout()
                .flush()
                .map_err(|e| format!("Failed to flush stdout: {e}"))?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("Failed to read stdin: {e}"))?;

        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        let quit = cmd == Command::Quit;
        match execute(&mut session, &plotter, cmd) {
            Ok(output) => output.iter().for_each(|l| println!("{l}")),
            Err(err) => eprintln!("{err}"),
        }
        if quit {
            break;
        }
    }
    Ok(())
}
