use super::InterfaceMatch;
use crate::error::{PathError, Result};
use crate::model::{Link, LinkPath, ScionHop, ScionPath, TopologyGraph};

/// Interface ids `(from, to)` for traversing `link` out of AS `from`.
pub fn interface_ids(link: &Link, from: u32, matching: InterfaceMatch) -> (u32, u32) {
    let ends = &link.endpoints;
    let reversed = match matching {
        InterfaceMatch::Exact => ends.second.asn == from && ends.first.asn != from,
        InterfaceMatch::Substring => ends.second_raw().contains(&from.to_string()),
    };
    if reversed {
        (ends.second.ifid, ends.first.ifid)
    } else {
        (ends.first.ifid, ends.second.ifid)
    }
}

pub fn render_path(
    graph: &TopologyGraph,
    path: &LinkPath,
    matching: InterfaceMatch,
) -> Result<ScionPath> {
    path.iter()
        .map(|hop| -> Result<ScionHop> {
            let link = graph.link(&hop.link).ok_or(PathError::NoEdgeFound {
                from: hop.from,
                to: hop.to,
            })?;
            let (from_id, to_id) = interface_ids(link, hop.from, matching);
            Ok(ScionHop {
                from: hop.from,
                to: hop.to,
                link: hop.link.clone(),
                from_id,
                to_id,
                capacity: link.capacity,
                latency: link.latency,
                packet_loss: link.packet_loss,
            })
        })
        .collect()
}
