use recoil::prelude::*;

/// Drag right, let go, then grab the element again while it springs back
const GESTURE: &str = "
# drag 120px to the right
down 100 50
move 160 50
move 228 52
wait 4
up
# let it spring back for a few frames
wait 6
# grab it again mid-return and nudge it
down 400 50
move 420 50
wait 4
up
settle
";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional path to a gesture script, falls back to the built-in gesture
    let source = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Failed to read {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => GESTURE.to_string(),
    };

    let script = match Script::parse(&source) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("Invalid gesture script: {}", err);
            std::process::exit(1);
        }
    };

    // Gesture-coupled animation: follows the pointer, grabbed mid-return without a jump
    log::info!("DraggableSpringElement");
    Host::new(DraggableSpringElement::new()).run(&script);

    // Declared-target animation: trails the pointer and jumps when grabbed again
    log::info!("TargetDrivenDrag");
    Host::new(TargetDrivenDrag::new()).run(&script);

    // Declared-target animation used correctly: taps toggle between two positions
    log::info!("ToggleOffset");
    let taps = Script::parse("down 10\nup 10\nwait 10\ndown 10\nup 10\nsettle")
        .unwrap_or_default();
    Host::new(ToggleOffset::new(100)).run(&taps);
}
