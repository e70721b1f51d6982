use crate::report::{entry::CertEntries, null_as_default, CertEntry};
use serde::Deserialize;
use std::fmt;


#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
/// Certificate inventory of a single server
pub struct ServerReport {
    /// etcd certificates
    #[serde(deserialize_with = "null_as_default")]
    pub etcd: CertEntries,

    /// Certificates embedded in kubeconfig files
    #[serde(deserialize_with = "null_as_default")]
    pub kubeconfigs: CertEntries,

    /// Report metadata
    #[serde(deserialize_with = "null_as_default")]
    pub meta: ServerMeta,

    /// OpenShift master/node certificates
    #[serde(deserialize_with = "null_as_default")]
    pub ocp_certs: CertEntries,

    /// Registry certificates
    #[serde(deserialize_with = "null_as_default")]
    pub registry: CertEntries,

    /// Router certificates
    #[serde(deserialize_with = "null_as_default")]
    pub router: CertEntries,
}


impl ServerReport {
    /// Entries of given category
    pub fn entries(&self, category: Category) -> &[CertEntry] {
        match category {
            Category::Etcd => &self.etcd,
            Category::Kubeconfigs => &self.kubeconfigs,
            Category::OcpCerts => &self.ocp_certs,
            Category::Registry => &self.registry,
            Category::Router => &self.router,
        }
    }


    /// Number of entries in all categories
    pub fn length(&self) -> usize {
        Category::ALL
            .iter()
            .map(|category| self.entries(*category).len())
            .sum()
    }
}


#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
/// Generator metadata attached to each server
pub struct ServerMeta {
    /// When the report was generated, "YYYY-MM-DD HH:MM:SS.ffffff"
    #[serde(deserialize_with = "null_as_default")]
    pub checked_at_time: String,

    /// Whether the generator listed all certificates ("True"/"False")
    #[serde(deserialize_with = "null_as_default")]
    pub show_all: String,

    /// Generator's own warning date
    #[serde(deserialize_with = "null_as_default")]
    pub warn_before_date: String,

    /// Generator's own warning window in days
    #[serde(deserialize_with = "null_as_default")]
    pub warning_days: i64,
}


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Certificate categories of a server report
pub enum Category {
    /// etcd
    Etcd,

    /// kubeconfigs
    Kubeconfigs,

    /// ocp_certs
    OcpCerts,

    /// registry
    Registry,

    /// router
    Router,
}


impl Category {
    /// All categories, in reporting order
    pub const ALL: [Category; 5] = [
        Category::Etcd,
        Category::Kubeconfigs,
        Category::OcpCerts,
        Category::Registry,
        Category::Router,
    ];


    /// Name of the category, same as its report key
    pub fn name(&self) -> &'static str {
        match self {
            Category::Etcd => "etcd",
            Category::Kubeconfigs => "kubeconfigs",
            Category::OcpCerts => "ocp_certs",
            Category::Registry => "registry",
            Category::Router => "router",
        }
    }
}


impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
