use std::error::Error;

use image::Rgb;
use qrpayload::{
    store::{encode_code, EyeShape},
    CodeBuilder, Payload, SecurityKind, Style,
};

fn main() -> Result<(), Box<dyn Error>> {
    let payload = Payload::wifi("Guest Network", "correct horse", false, SecurityKind::Wpa);
    let style =
        Style { foreground: Rgb([20, 40, 120]), eye_shape: EyeShape::Rounded, ..Style::default() };

    // Name is derived from the SSID when not set
    let code = CodeBuilder::new(payload).style(style).build();

    println!("Name: {}", code.name());
    println!("Encode this: {}", code.formatted_string());
    println!("Stored as: {}", String::from_utf8(encode_code(&code)?)?);

    Ok(())
}
