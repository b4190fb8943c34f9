//! Webcams command handler.

use anyhow::Result;

use skiscore_core::webcams::{known_keywords, webcams_for_resort};

/// List webcams for a resort name. Needs no database or network.
pub fn execute(resort: &str) -> Result<()> {
    let cams = webcams_for_resort(resort);

    if cams.is_empty() {
        println!("No webcams known for '{resort}'.");
        println!(
            "Known resorts: {}",
            known_keywords().collect::<Vec<_>>().join(", ")
        );
        return Ok(());
    }

    for cam in &cams {
        println!("{} [{}]", cam.name, cam.stream_type.as_str());
        println!("  stream:  {}", cam.stream_url);
        println!("  preview: {}", cam.image_url());
    }
    Ok(())
}
