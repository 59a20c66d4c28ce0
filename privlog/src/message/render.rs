//! Rendering of captured fragments into the final message text.
//!
//! Each value fragment goes through the same pipeline, in order:
//!
//! 1. invoke the producer (exactly once),
//! 2. format the value with the fragment's formatting policy,
//! 3. apply the privacy policy to the formatted text,
//! 4. apply alignment (every kind except booleans).

use super::fragment::Fragment;
use crate::policy::{Alignment, Privacy, RenderOptions};

impl Fragment<'_> {
    /// Renders this fragment and appends it to `out`, consuming the producer.
    pub(crate) fn render_into(self, out: &mut String, options: &RenderOptions) {
        match self {
            Self::Literal(text) => out.push_str(&text),
            Self::Text {
                producer,
                alignment,
                privacy,
            }
            | Self::Displayed {
                producer,
                alignment,
                privacy,
            } => push_value(out, producer(), privacy, alignment, options),
            Self::SignedInteger {
                producer,
                format,
                alignment,
                privacy,
            } => push_value(
                out,
                format.apply_to_signed(producer()),
                privacy,
                alignment,
                options,
            ),
            Self::UnsignedInteger {
                producer,
                format,
                alignment,
                privacy,
            } => push_value(
                out,
                format.apply_to_unsigned(producer()),
                privacy,
                alignment,
                options,
            ),
            Self::Float {
                producer,
                format,
                alignment,
                privacy,
            } => push_value(
                out,
                format.apply_to(f64::from(producer())),
                privacy,
                alignment,
                options,
            ),
            Self::Double {
                producer,
                format,
                alignment,
                privacy,
            } => push_value(
                out,
                format.apply_to(producer()),
                privacy,
                alignment,
                options,
            ),
            Self::Bool {
                producer,
                format,
                privacy,
            } => {
                let text = format.apply_to(producer()).to_owned();
                out.push_str(&privacy.apply_to(text, options));
            }
        }
    }
}

fn push_value(
    out: &mut String,
    text: String,
    privacy: Privacy,
    alignment: Alignment,
    options: &RenderOptions,
) {
    let redacted = privacy.apply_to(text, options);
    out.push_str(&alignment.apply_to(redacted));
}

/// Folds fragments left to right into one string.
pub(crate) fn render_fragments(fragments: Vec<Fragment<'_>>, options: &RenderOptions) -> String {
    fragments
        .into_iter()
        .fold(String::new(), |mut out, fragment| {
            fragment.render_into(&mut out, options);
            out
        })
}
