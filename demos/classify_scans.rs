use qrpayload::{classify, classify_bytes, Payload};

fn main() {
    let scans = [
        "https://example.com/menu",
        "mailto:hello@example.com?subject=Booking&body=Table%20for%202",
        "tel:+15551234",
        "https://wa.me/15551234?text=On%20my%20way",
        "WIFI:S:Cafe;T:nopass;;",
        "BEGIN:VCARD\nVERSION:3.0\nN:Doe;Jane;;;\nFN:Jane Doe\nORG:Acme\nEND:VCARD",
        "Remember the milk",
    ];

    for scan in scans {
        let payload = classify(scan);
        println!("{:<8} {:?}", payload.kind().to_string(), payload);
    }

    // Shift_JIS bytes as a scanner may return them
    let data = [0x83, 0x65, 0x83, 0x58, 0x83, 0x67];
    if let Payload::Text { content } = classify_bytes(&data) {
        println!("{:<8} {content}", "text");
    }
}
