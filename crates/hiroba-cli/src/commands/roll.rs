use colored::Colorize;
use hiroba_dice::DiceTray;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(dice: usize, seed: Option<u64>) -> Result<(), String> {
    if dice == 0 {
        return Err("roll at least one die".into());
    }

    let mut tray = DiceTray::new(dice);
    match seed {
        Some(seed) => tray.roll(&mut StdRng::seed_from_u64(seed)),
        None => tray.roll(&mut rand::rng()),
    };

    if tray.is_zorome() {
        println!("  {tray} {}", "zorome!".bold().green());
    } else {
        println!("  {tray}");
    }

    Ok(())
}
