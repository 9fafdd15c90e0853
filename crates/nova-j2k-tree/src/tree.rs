use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::element::{
    Element, ElementData, ElementKind, Slot, SlotDecl, SlotMut, SlotRef, SlotShape,
};
use crate::error::{ContractViolation, Result};
use crate::origin::SourceOrigin;
use crate::settings::ConverterSettings;

/// Stable handle of a node inside a [`Tree`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        NodeId(raw)
    }

    /// Handle for the node stored at `index`; fails once ids no longer fit.
    fn for_index(index: usize) -> std::result::Result<Self, ContractViolation> {
        u32::try_from(index)
            .map(NodeId)
            .map_err(|_| ContractViolation::TreeFull { len: index })
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData {
    element: Element,
    parent: Option<NodeId>,
}

/// Arena owning every node of one conversion unit.
///
/// Nodes are never freed: a detached or replaced node stays addressable, it
/// is just no longer reachable from its former parent. Parent links are only
/// written by the slot API below, and every mutation is validated completely
/// before anything is written.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<NodeData>,
    pub(crate) origins: HashMap<NodeId, SourceOrigin>,
    settings: ConverterSettings,
}

impl Tree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: ConverterSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ConverterSettings {
        &self.settings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node and attaches every child its slots reference.
    pub fn alloc(&mut self, element: impl Into<Element>) -> Result<NodeId> {
        let element = element.into();
        let kind = element.kind();

        let mut seen = HashSet::new();
        for decl in kind.slots() {
            let occupants = element
                .slot_ref(decl.slot)
                .ok_or(ContractViolation::NoSuchSlot {
                    kind,
                    slot: decl.slot,
                })?;
            if occupants.shape() != decl.shape {
                return Err(ContractViolation::SlotShape {
                    kind,
                    slot: decl.slot,
                    expected: decl.shape,
                }
                .into());
            }
            if kind == ElementKind::EmptyClassBody && !occupants.as_slice().is_empty() {
                return Err(ContractViolation::EmptyClassBodyDeclarations.into());
            }
            for &child in occupants.as_slice() {
                self.check_detached(child)?;
                self.check_category(kind, decl, child)?;
                if !seen.insert(child) {
                    return Err(ContractViolation::DuplicateChild { node: child }.into());
                }
            }
        }

        let id = NodeId::for_index(self.nodes.len())?;
        for &child in &seen {
            self.nodes[child.idx()].parent = Some(id);
        }
        self.nodes.push(NodeData {
            element,
            parent: None,
        });
        tracing::trace!(target: "nova.j2k.tree", node = ?id, ?kind, children = seen.len(), "allocated node");
        Ok(id)
    }

    pub fn element(&self, id: NodeId) -> Result<&Element> {
        Ok(&self.node(id)?.element)
    }

    pub fn kind(&self, id: NodeId) -> Result<ElementKind> {
        Ok(self.node(id)?.element.kind())
    }

    /// Typed view of a node; fails if it is not a `T`.
    pub fn get<T: ElementData>(&self, id: NodeId) -> Result<&T> {
        let element = &self.node(id)?.element;
        T::cast(element).ok_or_else(|| {
            ContractViolation::UnexpectedKind {
                node: id,
                actual: element.kind(),
                expected: T::KIND,
            }
            .into()
        })
    }

    /// Runs `f` on the flat attributes of a node.
    ///
    /// Child links cannot be rewritten this way: if `f` replaces the value
    /// wholesale with one pointing at other children, the node is restored
    /// and the call fails.
    pub fn update<T: ElementData, R>(&mut self, id: NodeId, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        self.get::<T>(id)?;
        let node = &mut self.nodes[id.idx()];
        let before = node.element.clone();
        let data = T::cast_mut(&mut node.element).ok_or(ContractViolation::UnknownNode(id))?;
        let ret = f(data);
        if !same_children(&before, &node.element) {
            node.element = before;
            return Err(ContractViolation::ChildrenReassigned { node: id }.into());
        }
        Ok(ret)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// The parent and the slot holding `id`, if it is attached.
    pub fn slot_of(&self, id: NodeId) -> Result<Option<(NodeId, Slot)>> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(None);
        };
        let element = &self.node(parent)?.element;
        let slot = element.kind().slots().iter().find(|decl| {
            element
                .slot_ref(decl.slot)
                .is_some_and(|occupants| occupants.as_slice().contains(&id))
        });
        Ok(slot.map(|decl| (parent, decl.slot)))
    }

    /// Occupant of a single slot.
    pub fn child(&self, id: NodeId, slot: Slot) -> Result<NodeId> {
        match self.slot_ref(id, slot, SlotShape::Single)? {
            SlotRef::Single(child) => Ok(child),
            SlotRef::List(_) => Err(self.shape_error(id, slot, SlotShape::Single)),
        }
    }

    /// Occupants of a list slot, in order.
    pub fn children(&self, id: NodeId, slot: Slot) -> Result<&[NodeId]> {
        match self.slot_ref(id, slot, SlotShape::List)? {
            SlotRef::List(children) => Ok(children),
            SlotRef::Single(_) => Err(self.shape_error(id, slot, SlotShape::List)),
        }
    }

    /// Every slot of a node with its occupants, in declaration order.
    pub fn slots(&self, id: NodeId) -> Result<Vec<(SlotDecl, SlotRef<'_>)>> {
        let element = &self.node(id)?.element;
        Ok(element
            .kind()
            .slots()
            .iter()
            .filter_map(|decl| element.slot_ref(decl.slot).map(|occupants| (*decl, occupants)))
            .collect())
    }

    /// Direct children in traversal order.
    pub fn child_nodes(&self, id: NodeId) -> Result<Vec<NodeId>> {
        Ok(self
            .slots(id)?
            .into_iter()
            .flat_map(|(_, occupants)| occupants.as_slice().to_vec())
            .collect())
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool> {
        self.node(ancestor)?;
        let mut current = self.node(node)?.parent;
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.node(id)?.parent;
        }
        Ok(false)
    }

    /// Every node below `root`, in pre-order.
    pub fn descendants(&self, root: NodeId) -> Result<Vec<NodeId>> {
        let mut out = self.preorder(root)?;
        out.remove(0);
        Ok(out)
    }

    /// Nodes under `root` (inclusive) that still need lowering: Java-flavored
    /// kinds and expressions holding a Java operator or qualifier.
    pub fn java_flavored_nodes(&self, root: NodeId) -> Result<Vec<NodeId>> {
        let mut out = Vec::new();
        for id in self.preorder(root)? {
            let element = &self.node(id)?.element;
            if element.kind().is_java() || holds_java_token(element) {
                out.push(id);
            }
        }
        Ok(out)
    }

    /// Swaps the occupant of a single slot and returns the previous one,
    /// which is left detached.
    pub fn replace_child(&mut self, parent: NodeId, slot: Slot, new: NodeId) -> Result<NodeId> {
        let decl = self.decl(parent, slot, SlotShape::Single)?;
        let old = self.child(parent, slot)?;
        if old == new {
            self.node(new)?;
            return Ok(old);
        }
        self.check_attachable(parent, decl, new)?;

        match self.slot_mut(parent, slot)? {
            SlotMut::Single(occupant) => *occupant = new,
            SlotMut::List(_) => return Err(self.shape_error(parent, slot, SlotShape::Single)),
        }
        self.nodes[old.idx()].parent = None;
        self.nodes[new.idx()].parent = Some(parent);
        tracing::trace!(target: "nova.j2k.tree", ?parent, ?slot, ?old, ?new, "replaced child");
        Ok(old)
    }

    /// Swaps the contents of a list slot and returns the nodes that were
    /// dropped from it.
    ///
    /// `new` may mix detached nodes with current members of the same slot,
    /// so lists can be reordered or shrunk in one step.
    pub fn replace_children(
        &mut self,
        parent: NodeId,
        slot: Slot,
        new: Vec<NodeId>,
    ) -> Result<Vec<NodeId>> {
        let decl = self.decl(parent, slot, SlotShape::List)?;
        if self.kind(parent)? == ElementKind::EmptyClassBody && !new.is_empty() {
            return Err(ContractViolation::EmptyClassBodyDeclarations.into());
        }
        let current: HashSet<NodeId> = self.children(parent, slot)?.iter().copied().collect();

        let mut seen = HashSet::new();
        for &node in &new {
            if !seen.insert(node) {
                return Err(ContractViolation::DuplicateChild { node }.into());
            }
            if !current.contains(&node) {
                self.check_attachable(parent, decl, node)?;
            }
        }

        let list = match self.slot_mut(parent, slot)? {
            SlotMut::List(list) => list,
            SlotMut::Single(_) => return Err(self.shape_error(parent, slot, SlotShape::List)),
        };
        let old = std::mem::replace(list, new.clone());
        let removed: Vec<NodeId> = old.into_iter().filter(|id| !seen.contains(id)).collect();
        for &id in &removed {
            self.nodes[id.idx()].parent = None;
        }
        for &id in &new {
            self.nodes[id.idx()].parent = Some(parent);
        }
        tracing::trace!(
            target: "nova.j2k.tree",
            ?parent,
            ?slot,
            len = new.len(),
            removed = removed.len(),
            "replaced children"
        );
        Ok(removed)
    }

    /// Attaches a detached node at `index` of a list slot.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        slot: Slot,
        index: usize,
        node: NodeId,
    ) -> Result<()> {
        let decl = self.decl(parent, slot, SlotShape::List)?;
        if self.kind(parent)? == ElementKind::EmptyClassBody {
            return Err(ContractViolation::EmptyClassBodyDeclarations.into());
        }
        let len = self.children(parent, slot)?.len();
        if index > len {
            return Err(ContractViolation::IndexOutOfBounds { slot, index, len }.into());
        }
        self.check_attachable(parent, decl, node)?;

        match self.slot_mut(parent, slot)? {
            SlotMut::List(list) => list.insert(index, node),
            SlotMut::Single(_) => return Err(self.shape_error(parent, slot, SlotShape::List)),
        }
        self.nodes[node.idx()].parent = Some(parent);
        tracing::trace!(target: "nova.j2k.tree", ?parent, ?slot, index, ?node, "inserted child");
        Ok(())
    }

    /// Removes a node from the list slot holding it. Detaching a root is a
    /// no-op; single slots have to be replaced instead.
    pub fn detach(&mut self, node: NodeId) -> Result<()> {
        let Some((parent, slot)) = self.slot_of(node)? else {
            return Ok(());
        };
        match self.slot_mut(parent, slot)? {
            SlotMut::List(list) => list.retain(|&id| id != node),
            SlotMut::Single(_) => {
                return Err(ContractViolation::DetachFromSingleSlot { node, parent, slot }.into())
            }
        }
        self.nodes[node.idx()].parent = None;
        tracing::trace!(target: "nova.j2k.tree", ?parent, ?slot, ?node, "detached child");
        Ok(())
    }

    fn node(&self, id: NodeId) -> std::result::Result<&NodeData, ContractViolation> {
        self.nodes
            .get(id.idx())
            .ok_or(ContractViolation::UnknownNode(id))
    }

    fn preorder(&self, root: NodeId) -> Result<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            let children = self.child_nodes(id)?;
            stack.extend(children.into_iter().rev());
        }
        Ok(out)
    }

    fn decl(&self, id: NodeId, slot: Slot, shape: SlotShape) -> Result<SlotDecl> {
        let kind = self.kind(id)?;
        let decl = kind
            .slot_decl(slot)
            .ok_or(ContractViolation::NoSuchSlot { kind, slot })?;
        if decl.shape != shape {
            return Err(ContractViolation::SlotShape {
                kind,
                slot,
                expected: shape,
            }
            .into());
        }
        Ok(decl)
    }

    fn slot_ref(&self, id: NodeId, slot: Slot, shape: SlotShape) -> Result<SlotRef<'_>> {
        self.decl(id, slot, shape)?;
        let element = &self.node(id)?.element;
        element.slot_ref(slot).ok_or_else(|| {
            ContractViolation::NoSuchSlot {
                kind: element.kind(),
                slot,
            }
            .into()
        })
    }

    fn slot_mut(&mut self, id: NodeId, slot: Slot) -> Result<SlotMut<'_>> {
        let kind = self.kind(id)?;
        self.nodes[id.idx()]
            .element
            .slot_mut(slot)
            .ok_or_else(|| ContractViolation::NoSuchSlot { kind, slot }.into())
    }

    fn shape_error(&self, id: NodeId, slot: Slot, expected: SlotShape) -> crate::J2kError {
        match self.kind(id) {
            Ok(kind) => ContractViolation::SlotShape {
                kind,
                slot,
                expected,
            }
            .into(),
            Err(err) => err,
        }
    }

    fn check_detached(&self, node: NodeId) -> Result<()> {
        if let Some(parent) = self.node(node)?.parent {
            return Err(ContractViolation::AlreadyAttached { node, parent }.into());
        }
        Ok(())
    }

    fn check_category(&self, kind: ElementKind, decl: &SlotDecl, child: NodeId) -> Result<()> {
        let child_kind = self.kind(child)?;
        if !child_kind.is(decl.category) {
            return Err(ContractViolation::SlotCategory {
                kind,
                slot: decl.slot,
                expected: decl.category,
                child,
                child_kind,
            }
            .into());
        }
        Ok(())
    }

    /// Everything that must hold before `node` can be placed under `parent`.
    fn check_attachable(&self, parent: NodeId, decl: SlotDecl, node: NodeId) -> Result<()> {
        self.check_detached(node)?;
        if node == parent || self.is_ancestor(node, parent)? {
            return Err(ContractViolation::Cycle { node, parent }.into());
        }
        self.check_category(self.kind(parent)?, &decl, node)
    }
}

fn same_children(a: &Element, b: &Element) -> bool {
    a.kind() == b.kind()
        && a.kind()
            .slots()
            .iter()
            .all(|decl| a.slot_ref(decl.slot) == b.slot_ref(decl.slot))
}

fn holds_java_token(element: &Element) -> bool {
    match element {
        Element::BinaryExpression(e) => e.operator.is_java(),
        Element::PrefixExpression(e) => e.operator.is_java(),
        Element::PostfixExpression(e) => e.operator.is_java(),
        Element::QualifiedExpression(e) => e.qualifier.is_java(),
        _ => false,
    }
}
