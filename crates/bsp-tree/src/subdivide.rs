//! Routes a single polygon to the buckets a BSP node (or the clipper)
//! partitions its input into, relative to a divider.

use crate::{Classification, CsgError, Cuttable, Plane, Polygon};

/// Classifies `polygon` against `divider_plane` and appends it (or its
/// front/back fragments, if it spans the plane) to the matching sink(s).
///
/// This is the four-distinct-sinks form the tree builder uses, where
/// orientation of coplanar polygons must survive as which list they land
/// in. The clipper needs the same classification but with coplanar
/// polygons folded into the front/back buckets instead of kept separate;
/// since Rust's borrow checker won't allow passing the same `Vec` as two
/// simultaneous `&mut` parameters, that variant is [`subdivide_merged`]
/// rather than a call to this function with aliased arguments.
///
/// # Errors
/// Propagates [`CsgError::SplitFailed`] from the splitter when `polygon`
/// classifies as [`Classification::Spanning`] but fails to produce at least
/// one surviving fragment on each side.
pub fn subdivide<S: Clone>(
    divider: &Polygon<S>,
    divider_plane: &Plane,
    polygon: Polygon<S>,
    coplanar_front: &mut Vec<Polygon<S>>,
    coplanar_back: &mut Vec<Polygon<S>>,
    front: &mut Vec<Polygon<S>>,
    back: &mut Vec<Polygon<S>>,
) -> Result<(), CsgError> {
    match polygon.classify(divider_plane) {
        Classification::Front => front.push(polygon),
        Classification::Back => back.push(polygon),
        Classification::Coplanar => {
            if divider.normal().dot(&polygon.normal()) > 0.0 {
                coplanar_front.push(polygon);
            } else {
                coplanar_back.push(polygon);
            }
        }
        Classification::Spanning => {
            let (front_part, back_part) = polygon.split(divider_plane)?;
            if let Some(f) = front_part {
                front.push(f);
            }
            if let Some(b) = back_part {
                back.push(b);
            }
        }
    }
    Ok(())
}

/// Like [`subdivide`], but for callers that keep only two sinks: coplanar
/// polygons join `front` or `back` directly, by the same facing rule
/// (`dot(normal(divider), normal(polygon)) > 0` joins `front`). This is what
/// the clipper uses, since a clip treats a coplanar polygon as belonging to
/// whichever open half-space it faces.
pub fn subdivide_merged<S: Clone>(
    divider: &Polygon<S>,
    divider_plane: &Plane,
    polygon: Polygon<S>,
    front: &mut Vec<Polygon<S>>,
    back: &mut Vec<Polygon<S>>,
) -> Result<(), CsgError> {
    match polygon.classify(divider_plane) {
        Classification::Front => front.push(polygon),
        Classification::Back => back.push(polygon),
        Classification::Coplanar => {
            if divider.normal().dot(&polygon.normal()) > 0.0 {
                front.push(polygon);
            } else {
                back.push(polygon);
            }
        }
        Classification::Spanning => {
            let (front_part, back_part) = polygon.split(divider_plane)?;
            if let Some(f) = front_part {
                front.push(f);
            }
            if let Some(b) = back_part {
                back.push(b);
            }
        }
    }
    Ok(())
}
