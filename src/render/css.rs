use std::fmt::{self, Write};

use super::{
    animation::{AnimationRule, AnimationSheet, Keyframes, Length, Transform},
    number,
};

/// Serializes the sheet for a `<style>` element: keyframes first, then the
/// base `.cloud` rule, then one rule per cloud so the specific rules win.
#[must_use]
pub fn stylesheet(sheet: &AnimationSheet) -> String {
    let mut css = String::new();
    let _ = write_sheet(&mut css, sheet);
    css
}

fn write_sheet(out: &mut String, sheet: &AnimationSheet) -> fmt::Result {
    for keyframes in &sheet.keyframes {
        write_keyframes(out, keyframes)?;
    }
    write_rule(out, &sheet.base_rule)?;
    for rule in &sheet.cloud_rules {
        write_rule(out, rule)?;
    }
    Ok(())
}

fn write_keyframes(out: &mut String, keyframes: &Keyframes) -> fmt::Result {
    writeln!(out, "@keyframes {} {{", keyframes.name)?;
    for stop in &keyframes.stops {
        let offsets = stop
            .offsets
            .iter()
            .map(|offset| format!("{}%", number(*offset)))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "  {offsets} {{ transform: {}; }}",
            transform(stop.transform)
        )?;
    }
    writeln!(out, "}}")
}

fn write_rule(out: &mut String, rule: &AnimationRule) -> fmt::Result {
    let animations = rule
        .animations
        .iter()
        .map(|animation| {
            format!(
                "{} {}s {} infinite",
                animation.keyframes,
                number(animation.duration_secs),
                animation.timing.css_name()
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, ".{} {{", rule.class)?;
    writeln!(out, "  animation: {animations};")?;
    if let Some(delay) = rule.delay_secs {
        writeln!(out, "  animation-delay: {}s;", number(delay))?;
    }
    writeln!(out, "}}")
}

fn transform(transform: Transform) -> String {
    match transform {
        Transform::TranslateX(x) => format!("translateX({})", length(x)),
        Transform::Translate { x, y } => {
            format!("translateX({}) translateY({})", length(x), length(y))
        }
    }
}

fn length(length: Length) -> String {
    match length {
        Length::Px(px) => format!("{}px", number(px)),
        Length::ViewportWidthPlus(px) => format!("calc(100vw + {}px)", number(px)),
    }
}
