//! Rendering tests for single entity buffers.
#![cfg(feature = "xml")]

use xmle_model::{
    Area, BoundingBox, Changeset, ChangesetComment, Entity, EntityBuffer, InnerRing, ItemType,
    Location, Member, Metadata, MetadataOptions, Node, NodeRef, OuterRing, Relation, TagList,
    Timestamp, Way,
};
use xmle_serde::xml::{XmlBlockRenderer, XmlOutputOptions};
use xmle_serde::{Result, SerdeError};

// =============================================================================
// Helpers
// =============================================================================

fn no_metadata() -> XmlOutputOptions {
    XmlOutputOptions::new().with_metadata(MetadataOptions::none())
}

fn change_options() -> XmlOutputOptions {
    XmlOutputOptions::new()
        .with_metadata(MetadataOptions::none())
        .with_change_ops(true)
}

fn render(options: XmlOutputOptions, entities: Vec<Entity>) -> Result<String> {
    XmlBlockRenderer::new(options).render(&EntityBuffer::from(entities))
}

fn versioned_node(id: i64, version: u32, deleted: bool) -> Entity {
    Node {
        id,
        meta: Metadata {
            version,
            deleted,
            ..Default::default()
        },
        ..Default::default()
    }
    .into()
}

fn refs(ids: &[i64]) -> Vec<NodeRef> {
    ids.iter()
        .map(|&id| NodeRef::with_location(id, Location::new(id as f64 / 10.0, 0.5)))
        .collect()
}

// =============================================================================
// Nodes
// =============================================================================

#[test]
fn test_node_without_tags_is_empty_element() -> Result<()> {
    let node = Node {
        id: 5,
        location: Location::new(1.0, 2.0),
        ..Default::default()
    };
    let xml = render(no_metadata(), vec![node.into()])?;
    assert_eq!(xml, "  <node id=\"5\" lat=\"1\" lon=\"2\"/>\n");
    Ok(())
}

#[test]
fn test_node_without_location() -> Result<()> {
    let xml = render(no_metadata(), vec![versioned_node(3, 0, false)])?;
    assert_eq!(xml, "  <node id=\"3\"/>\n");
    Ok(())
}

#[test]
fn test_node_with_all_metadata_and_tags() -> Result<()> {
    let node = Node {
        id: 17,
        meta: Metadata {
            version: 2,
            timestamp: Timestamp::new(1_420_070_400),
            changeset: 99,
            uid: 42,
            user: "Jörg <admin>".to_string(),
            deleted: false,
        },
        location: Location::new(-0.5, 13.25),
        tags: [("amenity", "cafe"), ("name", "Tom's \"Diner\"")]
            .into_iter()
            .collect(),
    };
    let xml = render(XmlOutputOptions::new(), vec![node.into()])?;
    assert_eq!(
        xml,
        "  <node id=\"17\" version=\"2\" timestamp=\"2015-01-01T00:00:00Z\" uid=\"42\" \
         user=\"Jörg &lt;admin&gt;\" changeset=\"99\" lat=\"-0.5\" lon=\"13.25\">\n    \
         <tag k=\"amenity\" v=\"cafe\"/>\n    \
         <tag k=\"name\" v=\"Tom&apos;s &quot;Diner&quot;\"/>\n  \
         </node>\n"
    );
    Ok(())
}

#[test]
fn test_tags_keep_order_and_count() -> Result<()> {
    let keys = ["z", "a", "m", "b", "y"];
    let tags: TagList = keys.iter().map(|k| (*k, "1")).collect();
    let node = Node {
        id: 1,
        tags,
        ..Default::default()
    };
    let xml = render(no_metadata(), vec![node.into()])?;

    let written: Vec<&str> = xml
        .lines()
        .filter(|line| line.trim_start().starts_with("<tag "))
        .map(|line| line.split('"').nth(1).unwrap())
        .collect();
    assert_eq!(written, keys);
    Ok(())
}

#[test]
fn test_visible_flag() -> Result<()> {
    let options = no_metadata().with_visible_flag(true);
    let xml = render(
        options,
        vec![versioned_node(1, 1, false), versioned_node(2, 2, true)],
    )?;
    assert_eq!(
        xml,
        "  <node id=\"1\" visible=\"true\"/>\n  <node id=\"2\" visible=\"false\"/>\n"
    );
    Ok(())
}

// =============================================================================
// Ways
// =============================================================================

#[test]
fn test_empty_way_is_empty_element() -> Result<()> {
    let way = Way {
        id: 7,
        ..Default::default()
    };
    assert_eq!(render(no_metadata(), vec![way.into()])?, "  <way id=\"7\"/>\n");
    Ok(())
}

#[test]
fn test_way_node_refs_without_locations() -> Result<()> {
    let way = Way {
        id: 7,
        nodes: refs(&[1, 2]),
        tags: [("highway", "path")].into_iter().collect(),
        ..Default::default()
    };
    let xml = render(no_metadata(), vec![way.into()])?;
    assert_eq!(
        xml,
        "  <way id=\"7\">\n    <nd ref=\"1\"/>\n    <nd ref=\"2\"/>\n    \
         <tag k=\"highway\" v=\"path\"/>\n  </way>\n"
    );
    Ok(())
}

#[test]
fn test_way_node_refs_with_locations() -> Result<()> {
    let way = Way {
        id: 7,
        nodes: vec![
            NodeRef::with_location(1, Location::new(0.1, 0.5)),
            NodeRef::new(2),
        ],
        ..Default::default()
    };
    let xml = render(no_metadata().with_locations_on_ways(true), vec![way.into()])?;
    assert_eq!(
        xml,
        "  <way id=\"7\">\n    <nd ref=\"1\" lat=\"0.1\" lon=\"0.5\"/>\n    \
         <nd ref=\"2\"/>\n  </way>\n"
    );
    Ok(())
}

// =============================================================================
// Relations
// =============================================================================

#[test]
fn test_relation_members_in_order() -> Result<()> {
    let relation = Relation {
        id: 9,
        members: vec![
            Member::new(ItemType::Node, 10, "from"),
            Member::new(ItemType::Way, 20, "via"),
        ],
        ..Default::default()
    };
    let xml = render(no_metadata(), vec![relation.into()])?;
    assert_eq!(
        xml,
        "  <relation id=\"9\">\n    \
         <member type=\"node\" ref=\"10\" role=\"from\"/>\n    \
         <member type=\"way\" ref=\"20\" role=\"via\"/>\n  \
         </relation>\n"
    );
    Ok(())
}

#[test]
fn test_relation_member_role_is_escaped() -> Result<()> {
    let relation = Relation {
        id: 9,
        members: vec![Member::new(ItemType::Relation, 30, "a&b")],
        ..Default::default()
    };
    let xml = render(no_metadata(), vec![relation.into()])?;
    assert!(xml.contains("<member type=\"relation\" ref=\"30\" role=\"a&amp;b\"/>"));
    Ok(())
}

#[test]
fn test_empty_relation_is_empty_element() -> Result<()> {
    let relation = Relation {
        id: 9,
        ..Default::default()
    };
    assert_eq!(
        render(no_metadata(), vec![relation.into()])?,
        "  <relation id=\"9\"/>\n"
    );
    Ok(())
}

#[test]
fn test_relation_with_unwritable_member_type_fails() {
    let relation = Relation {
        id: 9,
        members: vec![
            Member::new(ItemType::Node, 1, ""),
            Member::new(ItemType::Area, 2, "outer"),
        ],
        ..Default::default()
    };
    let result = render(
        no_metadata(),
        vec![versioned_node(1, 1, false), relation.into()],
    );
    match result {
        Err(SerdeError::InvalidMemberType {
            relation,
            index,
            item_type,
        }) => {
            assert_eq!(relation, 9);
            assert_eq!(index, 1);
            assert_eq!(item_type, ItemType::Area);
        }
        other => panic!("expected InvalidMemberType, got {other:?}"),
    }
}

// =============================================================================
// Areas
// =============================================================================

#[test]
fn test_empty_area_is_empty_element() -> Result<()> {
    let area = Area {
        id: 4,
        ..Default::default()
    };
    assert_eq!(render(no_metadata(), vec![area.into()])?, "  <area id=\"4\"/>\n");
    Ok(())
}

#[test]
fn test_area_with_empty_outer_ring_is_not_collapsed() -> Result<()> {
    let area = Area {
        id: 4,
        outer_rings: vec![OuterRing::default()],
        ..Default::default()
    };
    assert_eq!(
        render(no_metadata(), vec![area.into()])?,
        "  <area id=\"4\">\n    <outer_ring>\n    </outer_ring>\n  </area>\n"
    );
    Ok(())
}

#[test]
fn test_area_ring_nesting() -> Result<()> {
    let area = Area {
        id: 14,
        outer_rings: vec![
            OuterRing::with_inner_rings(
                refs(&[1, 2]),
                vec![InnerRing { nodes: refs(&[3]) }],
            ),
            OuterRing::new(refs(&[4])),
        ],
        tags: [("building", "yes")].into_iter().collect(),
        ..Default::default()
    };
    let xml = render(no_metadata(), vec![area.into()])?;
    assert_eq!(
        xml,
        "  <area id=\"14\">\n\
         \x20   <outer_ring>\n\
         \x20     <nd ref=\"1\" lat=\"0.1\" lon=\"0.5\"/>\n\
         \x20     <nd ref=\"2\" lat=\"0.2\" lon=\"0.5\"/>\n\
         \x20     <inner_ring>\n\
         \x20       <nd ref=\"3\" lat=\"0.3\" lon=\"0.5\"/>\n\
         \x20     </inner_ring>\n\
         \x20   </outer_ring>\n\
         \x20   <outer_ring>\n\
         \x20     <nd ref=\"4\" lat=\"0.4\" lon=\"0.5\"/>\n\
         \x20   </outer_ring>\n\
         \x20   <tag k=\"building\" v=\"yes\"/>\n\
         \x20 </area>\n"
    );
    Ok(())
}

#[test]
fn test_area_inner_ring_counts_per_outer_ring() -> Result<()> {
    let inner_counts = [2usize, 0, 3];
    let area = Area {
        id: 2,
        outer_rings: inner_counts
            .iter()
            .map(|&count| {
                OuterRing::with_inner_rings(refs(&[1]), vec![InnerRing::default(); count])
            })
            .collect(),
        ..Default::default()
    };
    let xml = render(no_metadata(), vec![area.into()])?;

    let mut counts: Vec<usize> = Vec::new();
    for line in xml.lines().map(str::trim) {
        match line {
            "<outer_ring>" => counts.push(0),
            "<inner_ring>" => *counts.last_mut().unwrap() += 1,
            _ => {}
        }
    }
    assert_eq!(counts, inner_counts);
    Ok(())
}

// =============================================================================
// Changesets
// =============================================================================

#[test]
fn test_open_changeset_without_bounds() -> Result<()> {
    let changeset = Changeset {
        id: 3,
        num_changes: 3,
        num_comments: 0,
        ..Default::default()
    };
    let xml = render(XmlOutputOptions::new(), vec![changeset.into()])?;
    assert_eq!(
        xml,
        " <changeset id=\"3\" open=\"true\" num_changes=\"3\" comments_count=\"0\"/>\n"
    );
    Ok(())
}

#[test]
fn test_closed_changeset_with_user_bounds_tags_and_discussion() -> Result<()> {
    let changeset = Changeset {
        id: 8,
        created_at: Timestamp::new(1_420_070_400),
        closed_at: Timestamp::new(1_420_074_000),
        uid: 42,
        user: "mapper".to_string(),
        num_changes: 12,
        num_comments: 1,
        bounds: BoundingBox::new(Location::new(1.0, 2.0), Location::new(3.0, 4.0)),
        tags: [("comment", "fix <roads>")].into_iter().collect(),
        discussion: vec![ChangesetComment {
            date: Timestamp::new(1_420_077_600),
            uid: 7,
            user: "reviewer".to_string(),
            text: "looks good\nthanks".to_string(),
        }],
    };
    let xml = render(XmlOutputOptions::new(), vec![changeset.into()])?;
    assert_eq!(
        xml,
        " <changeset id=\"8\" created_at=\"2015-01-01T00:00:00Z\" \
         closed_at=\"2015-01-01T01:00:00Z\" open=\"false\" user=\"mapper\" uid=\"42\" \
         min_lat=\"1\" min_lon=\"2\" max_lat=\"3\" max_lon=\"4\" \
         num_changes=\"12\" comments_count=\"1\">\n\
         \x20 <tag k=\"comment\" v=\"fix &lt;roads&gt;\"/>\n\
         \x20 <discussion>\n\
         \x20  <comment uid=\"7\" user=\"reviewer\" date=\"2015-01-01T02:00:00Z\">\n\
         \x20   <text>looks good&#xA;thanks</text>\n\
         \x20  </comment>\n\
         \x20 </discussion>\n\
         \x20</changeset>\n"
    );
    Ok(())
}

#[test]
fn test_changeset_with_one_bounds_corner_writes_all_four() -> Result<()> {
    let changeset = Changeset {
        id: 1,
        bounds: BoundingBox::new(Location::new(1.0, 2.0), Location::undefined()),
        ..Default::default()
    };
    let xml = render(XmlOutputOptions::new(), vec![changeset.into()])?;
    for name in ["min_lat=", "min_lon=", "max_lat=", "max_lon="] {
        assert!(xml.contains(name), "missing {name} in {xml}");
    }
    Ok(())
}

#[test]
fn test_changesets_are_not_wrapped_in_operations() -> Result<()> {
    let changeset = Changeset {
        id: 1,
        ..Default::default()
    };
    let xml = render(change_options(), vec![changeset.into()])?;
    assert_eq!(
        xml,
        " <changeset id=\"1\" open=\"true\" num_changes=\"0\" comments_count=\"0\"/>\n"
    );
    Ok(())
}

#[test]
fn test_changeset_between_objects_closes_operation() -> Result<()> {
    let changeset = Changeset {
        id: 9,
        ..Default::default()
    };
    let xml = render(
        change_options(),
        vec![
            versioned_node(1, 1, false),
            changeset.into(),
            versioned_node(2, 1, false),
        ],
    )?;
    assert_eq!(
        xml,
        "  <create>\n    <node id=\"1\"/>\n  </create>\n\
         \x20<changeset id=\"9\" open=\"true\" num_changes=\"0\" comments_count=\"0\"/>\n\
         \x20 <create>\n    <node id=\"2\"/>\n  </create>\n"
    );
    Ok(())
}

// =============================================================================
// Change format
// =============================================================================

#[test]
fn test_change_format_groups_by_operation() -> Result<()> {
    let xml = render(
        change_options(),
        vec![
            versioned_node(1, 1, false),
            versioned_node(2, 2, false),
            versioned_node(3, 1, true),
        ],
    )?;
    assert_eq!(
        xml,
        "  <create>\n    <node id=\"1\"/>\n  </create>\n\
         \x20 <modify>\n    <node id=\"2\"/>\n  </modify>\n\
         \x20 <delete>\n    <node id=\"3\"/>\n  </delete>\n"
    );
    Ok(())
}

#[test]
fn test_change_format_single_group_for_same_operation() -> Result<()> {
    for n in [1usize, 2, 10] {
        let entities = (0..n)
            .map(|i| versioned_node(i as i64, 3, false))
            .collect();
        let xml = render(change_options(), entities)?;
        assert_eq!(xml.matches("<modify>").count(), 1);
        assert_eq!(xml.matches("</modify>").count(), 1);
        assert_eq!(xml.matches("<node ").count(), n);
        assert!(xml.starts_with("  <modify>\n"));
        assert!(xml.ends_with("  </modify>\n"));
    }
    Ok(())
}

#[test]
fn test_change_format_one_group_per_run() -> Result<()> {
    let way = Way {
        id: 5,
        meta: Metadata {
            version: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    let xml = render(
        change_options(),
        vec![
            versioned_node(1, 1, false),
            way.into(),
            versioned_node(2, 4, false),
            versioned_node(3, 4, false),
            versioned_node(4, 1, false),
        ],
    )?;
    let groups: Vec<&str> = xml
        .lines()
        .map(str::trim)
        .filter(|l| matches!(*l, "<create>" | "<modify>" | "<delete>"))
        .collect();
    assert_eq!(groups, ["<create>", "<modify>", "<create>"]);
    assert!(xml.contains("    <way id=\"5\"/>\n"));
    Ok(())
}

#[test]
fn test_visible_false_input_is_a_deletion() -> Result<()> {
    let entity: Entity =
        serde_json::from_str(r#"{"type":"node","id":1,"version":3,"visible":false}"#)?;
    let xml = render(change_options(), vec![entity])?;
    assert_eq!(xml, "  <delete>\n    <node id=\"1\"/>\n  </delete>\n");
    Ok(())
}

#[test]
fn test_change_format_empty_buffer_writes_nothing() -> Result<()> {
    assert_eq!(render(change_options(), Vec::new())?, "");
    Ok(())
}

#[test]
fn test_change_format_never_writes_visible_flag() -> Result<()> {
    let xml = render(
        change_options().with_visible_flag(true),
        vec![versioned_node(1, 1, true)],
    )?;
    assert!(!xml.contains("visible="));
    Ok(())
}

#[test]
fn test_renderer_reuse_starts_clean() -> Result<()> {
    let mut renderer = XmlBlockRenderer::new(change_options());
    let buffer = EntityBuffer::from(vec![versioned_node(1, 1, false)]);
    let first = renderer.render(&buffer)?;
    let second = renderer.render(&buffer)?;
    assert_eq!(first, second);
    assert_eq!(first.matches("<create>").count(), 1);
    Ok(())
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn test_escaped_values_unescape_to_original() -> Result<()> {
    let samples = [
        "plain",
        "<&>",
        "\"quoted\" and 'single'",
        "line\nbreak\r\ttab",
        "&amp; already",
        "<\n&\t'\r\">",
    ];
    for sample in samples {
        let node = Node {
            id: 1,
            tags: [("k", sample)].into_iter().collect(),
            ..Default::default()
        };
        let xml = render(no_metadata(), vec![node.into()])?;
        let line = xml.lines().nth(1).unwrap();
        let escaped = line
            .split("v=\"")
            .nth(1)
            .and_then(|rest| rest.strip_suffix("\"/>"))
            .unwrap();
        assert!(!escaped.contains(['<', '>', '"', '\n', '\r', '\t']));
        let unescaped = quick_xml::escape::unescape(escaped).unwrap();
        assert_eq!(unescaped, sample);
    }
    Ok(())
}
