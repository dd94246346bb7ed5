use hiroba_dice::{calculate_zorome_probability, format_probability, format_probability_as_fraction};

pub fn run(dice: u32) -> Result<(), String> {
    if dice == 0 {
        return Err("dice count must be at least 1".into());
    }
    let count = i32::try_from(dice).map_err(|_| format!("too many dice: {dice}"))?;

    let probability = calculate_zorome_probability(count);
    println!(
        "  {dice} dice: {} ({})",
        format_probability(probability),
        format_probability_as_fraction(dice)
    );

    Ok(())
}
