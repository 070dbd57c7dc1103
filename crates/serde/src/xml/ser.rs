//! Block renderer turning one buffer of entities into an XML fragment.
//!
//! A fragment contains the entity elements only; the document root and the
//! header are written by [`crate::xml::XmlOutputFormat`]. In change format
//! the renderer also opens and closes the `<create>`, `<modify>` and
//! `<delete>` elements around runs of objects with the same operation. An
//! operation element never spans two fragments: whatever is still open at
//! the end of a buffer is closed before the fragment is returned.
//!
//! Indentation with a prefix of 2 spaces (4 in change format):
//!
//! ```text
//! prefix      <node>, <way>, <relation>, <area>
//! prefix + 2  <nd>, <member>, <tag>, <outer_ring>
//! prefix + 4  <nd> of an outer ring, <inner_ring>
//! prefix + 6  <nd> of an inner ring
//! ```
//!
//! Changesets are never part of an operation: an open operation element is
//! closed before a changeset is written. They use their own fixed
//! indentation starting at one space.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, trace};
use xmle_model::{
    Area, Changeset, ChangesetComment, Entity, EntityBuffer, Node, NodeRef, OsmObject, Relation,
    TagList, Way,
};

use crate::encoding::xml_encode;
use crate::error::{Result, SerdeError};
use crate::xml::meta::metadata_attributes;
use crate::xml::options::XmlOutputOptions;
use crate::xml::utils::{
    push_escaped_attribute, push_int_attribute, push_lat_lon_attributes, push_raw_attribute,
    write_spaces,
};

/// Indentation of the operation elements.
const OPERATION_INDENT: usize = 2;

/// Indentation of `<changeset>` elements.
const CHANGESET_INDENT: usize = 1;

/// The operation an object is listed under in an osmChange document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    #[default]
    None,
    Create,
    Modify,
    Delete,
}

impl Operation {
    /// Deleted objects are deletions, first versions are creations,
    /// everything else is a modification.
    pub fn for_object<O: OsmObject + ?Sized>(object: &O) -> Self {
        if !object.visible() {
            Operation::Delete
        } else if object.version() == 1 {
            Operation::Create
        } else {
            Operation::Modify
        }
    }

    /// Element name, `None` for [`Operation::None`].
    pub fn tag_name(&self) -> Option<&'static str> {
        match self {
            Operation::None => None,
            Operation::Create => Some("create"),
            Operation::Modify => Some("modify"),
            Operation::Delete => Some("delete"),
        }
    }
}

/// Elements to close and open when the operation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub close: Option<&'static str>,
    pub open: Option<&'static str>,
}

/// Remembers which operation element is currently open.
#[derive(Debug, Default)]
pub struct OperationState {
    current: Operation,
}

impl OperationState {
    pub fn current(&self) -> Operation {
        self.current
    }

    /// Moves to `target`, returning what has to be written, or `None` if
    /// `target` is already open.
    pub fn switch_to(&mut self, target: Operation) -> Option<Transition> {
        if target == self.current {
            return None;
        }
        let transition = Transition {
            close: self.current.tag_name(),
            open: target.tag_name(),
        };
        self.current = target;
        Some(transition)
    }

    pub fn reset(&mut self) {
        self.current = Operation::None;
    }
}

/// Renders entity buffers to XML fragments.
///
/// A renderer can be reused for any number of buffers; each call to
/// [`render`](Self::render) starts from a clean state.
pub struct XmlBlockRenderer {
    options: XmlOutputOptions,
    writer: Writer<Vec<u8>>,
    operations: OperationState,
}

impl XmlBlockRenderer {
    pub fn new(options: XmlOutputOptions) -> Self {
        Self {
            options,
            writer: Writer::new(Vec::new()),
            operations: OperationState::default(),
        }
    }

    pub fn options(&self) -> &XmlOutputOptions {
        &self.options
    }

    /// Renders all entities of `buffer`, in order.
    ///
    /// On error nothing is returned for the buffer and the renderer is ready
    /// for the next one.
    pub fn render(&mut self, buffer: &EntityBuffer) -> Result<String> {
        let result = self.write_entities(buffer);
        self.operations.reset();
        let out = std::mem::take(self.writer.get_mut());
        result?;

        debug!(entities = buffer.len(), bytes = out.len(), "Rendered block");
        String::from_utf8(out).map_err(|e| SerdeError::Custom(e.to_string()))
    }

    fn write_entities(&mut self, buffer: &EntityBuffer) -> Result<()> {
        for entity in buffer {
            trace!(kind = %entity.item_type(), "Rendering entity");
            match entity {
                Entity::Node(node) => self.node(node)?,
                Entity::Way(way) => self.way(way)?,
                Entity::Relation(relation) => self.relation(relation)?,
                Entity::Area(area) => self.area(area)?,
                Entity::Changeset(changeset) => {
                    if self.options.use_change_ops() {
                        self.open_close_op_tag(Operation::None)?;
                    }
                    self.changeset(changeset)?
                }
            }
        }

        if self.options.use_change_ops() {
            self.open_close_op_tag(Operation::None)?;
        }
        Ok(())
    }

    fn prefix_spaces(&self) -> usize {
        if self.options.use_change_ops() { 4 } else { 2 }
    }

    fn write_empty(&mut self, indent: usize, element: BytesStart<'_>) -> Result<()> {
        write_spaces(self.writer.get_mut(), indent);
        self.writer.write_event(Event::Empty(element))?;
        self.writer.get_mut().push(b'\n');
        Ok(())
    }

    fn write_start(&mut self, indent: usize, element: BytesStart<'_>) -> Result<()> {
        write_spaces(self.writer.get_mut(), indent);
        self.writer.write_event(Event::Start(element))?;
        self.writer.get_mut().push(b'\n');
        Ok(())
    }

    fn write_end(&mut self, indent: usize, name: &str) -> Result<()> {
        write_spaces(self.writer.get_mut(), indent);
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        self.writer.get_mut().push(b'\n');
        Ok(())
    }

    fn open_close_op_tag(&mut self, op: Operation) -> Result<()> {
        let Some(transition) = self.operations.switch_to(op) else {
            return Ok(());
        };
        if let Some(name) = transition.close {
            self.write_end(OPERATION_INDENT, name)?;
        }
        if let Some(name) = transition.open {
            self.write_start(OPERATION_INDENT, BytesStart::new(name))?;
        }
        Ok(())
    }

    /// Opens the object element with its metadata attributes, switching the
    /// operation first in change format.
    fn begin_object<O: OsmObject>(
        &mut self,
        name: &'static str,
        object: &O,
    ) -> Result<BytesStart<'static>> {
        if self.options.use_change_ops() {
            self.open_close_op_tag(Operation::for_object(object))?;
        }

        let mut element = BytesStart::new(name);
        for (attribute, value) in metadata_attributes(&self.options, object) {
            push_escaped_attribute(&mut element, attribute, &value);
        }
        Ok(element)
    }

    fn write_tags(&mut self, tags: &TagList, indent: usize) -> Result<()> {
        for tag in tags {
            let mut element = BytesStart::new("tag");
            push_escaped_attribute(&mut element, "k", &tag.key);
            push_escaped_attribute(&mut element, "v", &tag.value);
            self.write_empty(indent, element)?;
        }
        Ok(())
    }

    fn write_node_ref(
        &mut self,
        node_ref: &NodeRef,
        indent: usize,
        with_location: bool,
    ) -> Result<()> {
        let mut element = BytesStart::new("nd");
        push_int_attribute(&mut element, "ref", node_ref.id);
        if with_location && node_ref.location.is_valid() {
            push_lat_lon_attributes(&mut element, "lat", "lon", &node_ref.location);
        }
        self.write_empty(indent, element)
    }

    fn node(&mut self, node: &Node) -> Result<()> {
        let prefix = self.prefix_spaces();
        let mut element = self.begin_object("node", node)?;

        if node.location.is_valid() {
            push_lat_lon_attributes(&mut element, "lat", "lon", &node.location);
        }

        if node.tags.is_empty() {
            return self.write_empty(prefix, element);
        }

        self.write_start(prefix, element)?;
        self.write_tags(&node.tags, prefix + 2)?;
        self.write_end(prefix, "node")
    }

    fn way(&mut self, way: &Way) -> Result<()> {
        let prefix = self.prefix_spaces();
        let element = self.begin_object("way", way)?;

        if way.tags.is_empty() && way.nodes.is_empty() {
            return self.write_empty(prefix, element);
        }

        self.write_start(prefix, element)?;
        let with_location = self.options.locations_on_ways();
        for node_ref in &way.nodes {
            self.write_node_ref(node_ref, prefix + 2, with_location)?;
        }
        self.write_tags(&way.tags, prefix + 2)?;
        self.write_end(prefix, "way")
    }

    fn relation(&mut self, relation: &Relation) -> Result<()> {
        let member_types = relation
            .members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                member
                    .item_type
                    .member_name()
                    .ok_or(SerdeError::InvalidMemberType {
                        relation: relation.id,
                        index,
                        item_type: member.item_type,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let prefix = self.prefix_spaces();
        let element = self.begin_object("relation", relation)?;

        if relation.tags.is_empty() && relation.members.is_empty() {
            return self.write_empty(prefix, element);
        }

        self.write_start(prefix, element)?;
        for (member, type_name) in relation.members.iter().zip(member_types) {
            let mut element = BytesStart::new("member");
            push_raw_attribute(&mut element, "type", type_name);
            push_int_attribute(&mut element, "ref", member.id);
            push_escaped_attribute(&mut element, "role", &member.role);
            self.write_empty(prefix + 2, element)?;
        }
        self.write_tags(&relation.tags, prefix + 2)?;
        self.write_end(prefix, "relation")
    }

    /// Ring node references always carry their location when it is known.
    fn area(&mut self, area: &Area) -> Result<()> {
        let prefix = self.prefix_spaces();
        let element = self.begin_object("area", area)?;

        if area.tags.is_empty() && area.outer_rings.is_empty() {
            return self.write_empty(prefix, element);
        }

        self.write_start(prefix, element)?;
        for outer in &area.outer_rings {
            self.write_start(prefix + 2, BytesStart::new("outer_ring"))?;
            for node_ref in &outer.nodes {
                self.write_node_ref(node_ref, prefix + 4, true)?;
            }
            for inner in outer.inner_rings() {
                self.write_start(prefix + 4, BytesStart::new("inner_ring"))?;
                for node_ref in &inner.nodes {
                    self.write_node_ref(node_ref, prefix + 6, true)?;
                }
                self.write_end(prefix + 4, "inner_ring")?;
            }
            self.write_end(prefix + 2, "outer_ring")?;
        }
        self.write_tags(&area.tags, prefix + 2)?;
        self.write_end(prefix, "area")
    }

    fn changeset(&mut self, changeset: &Changeset) -> Result<()> {
        let mut element = BytesStart::new("changeset");
        push_int_attribute(&mut element, "id", changeset.id);

        if changeset.created_at.is_set() {
            push_raw_attribute(&mut element, "created_at", &changeset.created_at.to_iso());
        }

        if changeset.closed_at.is_set() {
            push_raw_attribute(&mut element, "closed_at", &changeset.closed_at.to_iso());
            push_raw_attribute(&mut element, "open", "false");
        } else {
            push_raw_attribute(&mut element, "open", "true");
        }

        if !changeset.user_is_anonymous() {
            push_escaped_attribute(&mut element, "user", &changeset.user);
            push_int_attribute(&mut element, "uid", changeset.uid);
        }

        let bounds = &changeset.bounds;
        if bounds.bottom_left.is_defined() || bounds.top_right.is_defined() {
            push_lat_lon_attributes(&mut element, "min_lat", "min_lon", &bounds.bottom_left);
            push_lat_lon_attributes(&mut element, "max_lat", "max_lon", &bounds.top_right);
        }

        push_int_attribute(&mut element, "num_changes", changeset.num_changes);
        push_int_attribute(&mut element, "comments_count", changeset.num_comments);

        if changeset.tags.is_empty() && changeset.discussion.is_empty() {
            return self.write_empty(CHANGESET_INDENT, element);
        }

        self.write_start(CHANGESET_INDENT, element)?;
        self.write_tags(&changeset.tags, CHANGESET_INDENT + 1)?;
        if !changeset.discussion.is_empty() {
            self.write_discussion(&changeset.discussion)?;
        }
        self.write_end(CHANGESET_INDENT, "changeset")
    }

    fn write_discussion(&mut self, comments: &[ChangesetComment]) -> Result<()> {
        self.write_start(CHANGESET_INDENT + 1, BytesStart::new("discussion"))?;
        for comment in comments {
            let mut element = BytesStart::new("comment");
            push_int_attribute(&mut element, "uid", comment.uid);
            push_escaped_attribute(&mut element, "user", &comment.user);
            push_raw_attribute(&mut element, "date", &comment.date.to_iso_all());
            self.write_start(CHANGESET_INDENT + 2, element)?;

            write_spaces(self.writer.get_mut(), CHANGESET_INDENT + 3);
            self.writer
                .write_event(Event::Start(BytesStart::new("text")))?;
            self.writer.write_event(Event::Text(BytesText::from_escaped(xml_encode(
                &comment.text,
            ))))?;
            self.writer.write_event(Event::End(BytesEnd::new("text")))?;
            self.writer.get_mut().push(b'\n');

            self.write_end(CHANGESET_INDENT + 2, "comment")?;
        }
        self.write_end(CHANGESET_INDENT + 1, "discussion")
    }
}
