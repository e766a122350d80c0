use fitness_tracker_core::WorkoutCode;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for code in WorkoutCode::ALL {
        println!("{code}  {}", code.fields().join(" "));
    }
    Ok(())
}
