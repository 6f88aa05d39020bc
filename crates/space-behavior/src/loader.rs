//! Loads a [`Node`] tree from the hierarchical tag format described in
//! spec.md §6 ("a small hierarchical tag format with `BehaviorTree` root,
//! inner tags `Sequence`/`SequenceNode` and `Fallback`/`FallbackNode`
//! (interchangeable), and leaf tags matching action-callback names").
//!
//! Parsed with `roxmltree` — a real, dependency-light XML parser, chosen
//! over hand-rolling a tag scanner (SPEC_FULL.md §4.4).

use roxmltree::{Document, Node as XmlNode};

use crate::error::{BehaviorError, BehaviorResult};
use crate::tree::{ActionKind, Node};

const ROOT_TAG: &str = "BehaviorTree";

fn action_kind(tag: &str) -> Option<ActionKind> {
    match tag {
        "LocalSensingNode" => Some(ActionKind::LocalSensing),
        "DecisionMakingNode" => Some(ActionKind::DecisionMaking),
        "TaskExecutingNode" => Some(ActionKind::TaskExecuting),
        "ExplorationNode" => Some(ActionKind::Exploration),
        _ => None,
    }
}

/// Parse a behaviour tree from its XML-like textual description.
///
/// The `<BehaviorTree>` root is unwrapped transparently: it must have
/// exactly one child element, which becomes the returned tree's root node.
pub fn parse_tree(xml: &str) -> BehaviorResult<Node> {
    let doc = Document::parse(xml)?;
    let root = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name(ROOT_TAG))
        .ok_or(BehaviorError::MissingRoot)?;

    let children: Vec<XmlNode> = root.children().filter(|n| n.is_element()).collect();
    if children.len() != 1 {
        return Err(BehaviorError::RootChildCount(children.len()));
    }

    build_node(children[0])
}

fn build_node(xml_node: XmlNode) -> BehaviorResult<Node> {
    let tag = xml_node.tag_name().name();
    let children: Vec<XmlNode> = xml_node.children().filter(|n| n.is_element()).collect();

    match tag {
        "SequenceNode" | "Sequence" => {
            let nodes = children.into_iter().map(build_node).collect::<BehaviorResult<_>>()?;
            Ok(Node::Sequence(nodes))
        }
        "FallbackNode" | "Fallback" => {
            let nodes = children.into_iter().map(build_node).collect::<BehaviorResult<_>>()?;
            Ok(Node::Fallback(nodes))
        }
        _ => match action_kind(tag) {
            Some(kind) => Ok(Node::Action(kind)),
            None => Err(BehaviorError::UnknownNode(tag.to_string())),
        },
    }
}
