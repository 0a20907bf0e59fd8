// Devfile v1 schema types (parsed JSON/YAML).
// Pure data contract: construction happens via deserialization, nothing here
// computes derived values or validates cross-references.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DevfileError;

/// Devfile API version emitted by current tooling.
pub const API_VERSION: &str = "1.0.0";

/// Endpoint attribute controlling whether the endpoint is exposed publicly or
/// to the workspace only.
pub const PUBLIC_ENDPOINT_ATTRIBUTE: &str = "public";
/// Endpoint attribute controlling whether the endpoint is covered with
/// authentication.
pub const SECURE_ENDPOINT_ATTRIBUTE: &str = "secure";
/// Endpoint attribute indicating the endpoint type, e.g. `terminal` or `ide`.
pub const TYPE_ENDPOINT_ATTRIBUTE: &str = "type";
/// Endpoint attribute indicating the protocol spoken by the backend.
pub const PROTOCOL_ENDPOINT_ATTRIBUTE: &str = "protocol";

/// Attribute keys recognized on an [`Endpoint`]. The attribute map itself is
/// string-keyed; other keys are structurally legal but carry no meaning.
pub const ENDPOINT_ATTRIBUTES: [&str; 4] = [
    PUBLIC_ENDPOINT_ATTRIBUTE,
    SECURE_ENDPOINT_ATTRIBUTE,
    TYPE_ENDPOINT_ATTRIBUTE,
    PROTOCOL_ENDPOINT_ATTRIBUTE,
];

/// Root of a devfile document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileSpec {
    /// Devfile API version.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    /// Devfile naming metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DevfileMeta>,

    /// Workspace-level attributes, e.g. `persistVolumes`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<DevfileAttributes>,

    /// Projects to import into the workspace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectSpec>,

    /// Components (editor, plugins, containers, ...) providing the workspace
    /// features. Always present on the wire, even when empty.
    #[serde(default)]
    pub components: Vec<ComponentSpec>,

    /// Workspace-wide commands, each associated to a component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<CommandSpec>,
}

impl DevfileSpec {
    pub fn from_yaml(document: &str) -> Result<Self, DevfileError> {
        Ok(serde_yaml::from_str(document)?)
    }

    pub fn to_yaml(&self) -> Result<String, DevfileError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_json(document: &str) -> Result<Self, DevfileError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn to_json(&self) -> Result<String, DevfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON Schema for devfile documents, derived from these types.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(DevfileSpec)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generate_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist_volumes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_free: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectSpec {
    pub name: String,
    /// The project's source, type and location.
    pub source: ProjectSourceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectSourceSpec {
    /// Source location address: a URL for git and github projects, `file://`
    /// for zip.
    pub location: String,
    /// Source type.
    #[serde(rename = "type")]
    pub type_: String,
}

/// Discriminator carried in a component's `type` field. Kept as an opaque
/// string so that values outside the known set still decode; consumers switch
/// on it to decide which of the overlapping optional fields apply.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ComponentType(pub String);

impl ComponentType {
    pub const CHE_EDITOR: &'static str = "cheEditor";
    pub const CHE_PLUGIN: &'static str = "chePlugin";
    pub const DOCKERIMAGE: &'static str = "dockerimage";
    pub const KUBERNETES: &'static str = "kubernetes";
    pub const OPENSHIFT: &'static str = "openshift";

    pub const KNOWN: [&'static str; 5] = [
        Self::CHE_EDITOR,
        Self::CHE_PLUGIN,
        Self::DOCKERIMAGE,
        Self::KUBERNETES,
        Self::OPENSHIFT,
    ];

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentType {
    fn from(value: &str) -> Self {
        ComponentType(value.to_string())
    }
}

/// One workspace component. A single flat record for every component kind:
/// which optional fields are meaningful depends on `type`, and that
/// applicability is a convention, not enforced here (an `image` may
/// structurally appear next to a `kubernetes` type).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    /// Component kind, e.g. whether it is a plugin, an editor or a container.
    #[serde(rename = "type")]
    pub type_: ComponentType,

    /// User-assigned component name, unique per component set. Referenced by
    /// command actions.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alias: String,

    // cheEditor and chePlugin
    /// Fully qualified component id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Location of a Kubernetes list yaml file, for `kubernetes` and
    /// `openshift` components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    // dockerimage
    /// Docker image backing the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Memory limit, as a plain integer or with one of the suffixes
    /// E, P, T, G, M, K (or the power-of-two Ei..Ki forms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<String>,

    /// Whether project sources are mounted into the component. When they are,
    /// `CHE_PROJECTS_ROOT` holds the mount path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_sources: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<Endpoint>,

    /// Environment variables set in the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<Env>,

    /// Volumes mounted into the component.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,

    /// Command run instead of the image default. `None` means use whatever
    /// the image defines; an empty list is a distinct, explicit override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,

    /// Arguments for the (default or overridden) command. Same absent-vs-empty
    /// distinction as `command`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    // kubernetes and openshift
    /// Inlined content of the file `reference` points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_content: Option<String>,

    /// Object selector, to pick only selected items from the k8s/openshift
    /// list.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub selector: HashMap<String, String>,
}

/// Network endpoint of a dockerimage component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Endpoint {
    /// Attribute map; see [`ENDPOINT_ATTRIBUTES`] for the recognized keys.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    pub name: String,
    pub port: i64,
}

/// Environment variable of a dockerimage component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Env {
    pub name: String,
    pub value: String,
}

/// Volume mounted into a component. Components mounting a volume with the
/// same name share it and see the same files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub container_path: String,
    pub name: String,
}

/// Named command, unique per commands set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CommandSpec {
    /// Actions of the command. Currently a single action per command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<CommandActionSpec>,

    /// Additional command attributes.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,

    pub name: String,
}

/// One executable step of a command, bound by alias to a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandActionSpec {
    /// The action command-line string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Alias of the component the action runs against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// Action type, e.g. `exec`.
    #[serde(rename = "type")]
    pub type_: String,

    /// Working directory for the command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_content: Option<String>,
}
