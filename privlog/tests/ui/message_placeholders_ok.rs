// Test: every placeholder form expands to a renderable message

use privlog::{RenderOptions, message};

fn main() {
    let user = "alice";
    let count = 3_u32;

    let message = message!(
        "{{escaped}} {} {1} {named} {user}",
        count => public,
        "second" => public,
        named = 1.5_f64 => public,
    );
    let rendered = message.render_with(&RenderOptions::new());
    assert_eq!(rendered, "{escaped} 3 second 1.500000 <redacted>");
}
