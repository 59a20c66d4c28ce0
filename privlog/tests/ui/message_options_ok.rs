// Test: every option form is accepted for the kinds that support it

use privlog::{Alignment, BoolFormat, FloatFormat, IntegerFormat, Privacy, display, message};

fn main() {
    let flag = true;
    let ratio = 0.25_f32;
    let delta = -4_i16;
    let width = 6;
    let policy = Privacy::HASHED;

    let _ = message!(
        "{} {} {} {} {} {} {} {} {} {}",
        flag => public,
        flag => { private, format = truth },
        flag => { private(hash), format = BoolFormat::Answer },
        ratio => { format = fixed(3), align = left(8) },
        ratio => { format = fixed(1, sign), align = right(width) },
        ratio => format = FloatFormat::default(),
        delta => { privacy = policy, format = decimal(4, sign) },
        delta => { format = IntegerFormat::decimal(2), align = Alignment::Left(3) },
        display('x') => { public, align = none },
        String::from("owned") => private(none),
    );
}
