use std::fmt::Write;

use super::{
    number,
    shape::{CLOUD_FILL, CloudShape},
};

/// Inline SVG for one cloud; the opacity applies to the group as a whole.
#[must_use]
pub fn cloud_svg(shape: &CloudShape) -> String {
    let width = number(shape.width);
    let height = number(shape.height);
    let mut svg = format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" style="opacity: {}" aria-hidden="true">"#,
        number(shape.opacity)
    );
    for puff in &shape.puffs {
        let _ = write!(
            svg,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{CLOUD_FILL}"/>"#,
            number(puff.cx),
            number(puff.cy),
            number(puff.rx),
            number(puff.ry)
        );
    }
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shape::cloud_shape;

    #[test]
    fn three_puff_cloud_markup() {
        let svg = cloud_svg(&cloud_shape(200.0, 100.0, 0.75, 1));
        insta::assert_snapshot!(svg, @r#"<svg width="200" height="100" viewBox="0 0 200 100" style="opacity: 0.75" aria-hidden="true"><ellipse cx="50" cy="65" rx="40" ry="24" fill="white"/><ellipse cx="100" cy="55" rx="48" ry="30" fill="white"/><ellipse cx="150" cy="65" rx="40" ry="24" fill="white"/></svg>"#);
    }

    #[test]
    fn index_zero_adds_top_and_shoulder_puffs() {
        let svg = cloud_svg(&cloud_shape(200.0, 100.0, 1.0, 0));
        assert_eq!(svg.matches("<ellipse").count(), 5);
        assert!(svg.contains(r#"<ellipse cx="100" cy="25" rx="28" ry="18" fill="white"/>"#));
        assert!(svg.contains(r#"<ellipse cx="150" cy="40" rx="36" ry="24" fill="white"/>"#));
    }
}
