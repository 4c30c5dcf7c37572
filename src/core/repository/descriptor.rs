//! Repository descriptor
//!
//! A [`Repository`] wraps one workspace of a service document. It answers
//! questions about the repository (its key, its URI templates) straight from
//! the workspace, and fetches collections and single resources through the
//! shared [`Transport`]. Fetched collections are kept for the lifetime of
//! the descriptor.

use super::collection::{Collection, CollectionKind};
use super::template::{collect_templates, fill_template, pick_template, UriTemplate};
use crate::adapters::transport::{AuthMethod, RawResponse, Transport};
use crate::domain::namespaces::{APP, CMIS_CORE, CMIS_REST};
use crate::domain::{CmisError, Element, ObjectId, ProtocolViolation, RepositoryId, Result, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tokio::sync::OnceCell;

/// Template kind for fetching an object by id
pub const OBJECT_BY_ID: &str = "objectbyid";

/// Template kind for fetching a type definition by id
pub const TYPE_BY_ID: &str = "typebyid";

/// Turns fetched entries into domain objects
///
/// The repository only locates and fetches entries; interpreting an object
/// entry or a type entry is the factory's job.
pub trait EntryFactory: Send + Sync {
    type Object;
    type ObjectType;

    fn object_from_entry(&self, entry: RawResponse) -> Result<Self::Object>;

    fn type_from_entry(&self, entry: RawResponse) -> Result<Self::ObjectType>;
}

/// One repository advertised by a service document
///
/// # Example
///
/// ```no_run
/// use cmis_client::adapters::transport::{HttpTransport, RawResponse};
/// use cmis_client::config::RepositoryConfig;
/// use cmis_client::core::repository::{EntryFactory, Repository};
/// use cmis_client::domain::{CmisError, Element, ObjectId, Result};
/// use std::sync::Arc;
///
/// struct Passthrough;
///
/// impl EntryFactory for Passthrough {
///     type Object = RawResponse;
///     type ObjectType = RawResponse;
///
///     fn object_from_entry(&self, entry: RawResponse) -> Result<RawResponse> {
///         Ok(entry)
///     }
///
///     fn type_from_entry(&self, entry: RawResponse) -> Result<RawResponse> {
///         Ok(entry)
///     }
/// }
///
/// # async fn example(workspace: Element) -> Result<()> {
/// let transport = Arc::new(HttpTransport::new(&RepositoryConfig::default())?);
/// let repository = Repository::new(transport, Passthrough, workspace);
///
/// println!("{}", repository.key()?);
/// let root = repository.root_folder().await?;
/// let id = ObjectId::new("doc-1").map_err(CmisError::Configuration)?;
/// let document = repository.object_by_id(&id).await?;
/// # Ok(())
/// # }
/// ```
pub struct Repository<F: EntryFactory> {
    transport: Arc<dyn Transport>,
    factory: F,
    workspace: Element,
    templates: Vec<UriTemplate>,
    key: OnceLock<RepositoryId>,
    collections: [OnceCell<Option<Arc<Collection>>>; 5],
}

impl<F: EntryFactory> Repository<F> {
    /// Wrap a workspace element (`app:workspace`)
    pub fn new(transport: Arc<dyn Transport>, factory: F, workspace: Element) -> Self {
        let templates = collect_templates(&workspace);
        tracing::debug!(
            templates = templates.len(),
            "Repository descriptor created"
        );

        Self {
            transport,
            factory,
            workspace,
            templates,
            key: OnceLock::new(),
            collections: Default::default(),
        }
    }

    /// Pick a workspace out of a service document (`app:service`)
    ///
    /// With `repository_id` set, the workspace whose repository id matches is
    /// used; otherwise the first workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolViolation::MissingElement`] when no workspace
    /// qualifies.
    pub fn from_service_document(
        transport: Arc<dyn Transport>,
        factory: F,
        service: &Element,
        repository_id: Option<&str>,
    ) -> Result<Self> {
        let workspace = service
            .children_named(APP, "workspace")
            .find(|workspace| match repository_id {
                Some(wanted) => repository_key_text(workspace) == Some(wanted),
                None => true,
            })
            .ok_or_else(|| {
                ProtocolViolation::MissingElement(match repository_id {
                    Some(id) => format!("app:workspace for repository '{id}'"),
                    None => "app:workspace".to_string(),
                })
            })?;

        Ok(Self::new(transport, factory, workspace.clone()))
    }

    /// Repository id declared by the workspace
    ///
    /// Read once, then answered from memory.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolViolation::MissingElement`] when the workspace has no
    /// `cmisra:repositoryInfo/cmis:repositoryId`.
    pub fn key(&self) -> Result<&RepositoryId> {
        if let Some(key) = self.key.get() {
            return Ok(key);
        }

        let text = repository_key_text(&self.workspace).ok_or_else(|| {
            ProtocolViolation::MissingElement("cmisra:repositoryInfo/cmis:repositoryId".to_string())
        })?;
        let key = RepositoryId::new(text).map_err(ProtocolViolation::MissingElement)?;

        Ok(self.key.get_or_init(|| key))
    }

    /// Workspace this descriptor was built from
    pub fn workspace(&self) -> &Element {
        &self.workspace
    }

    /// All URI templates, in document order
    pub fn templates(&self) -> &[UriTemplate] {
        &self.templates
    }

    /// Template text of the first template declared for `kind`
    pub fn pick_template(&self, kind: &str) -> Option<&str> {
        pick_template(&self.templates, kind).map(|t| t.template.as_str())
    }

    /// Fetch a well-known collection
    ///
    /// The first successful call per kind performs the fetch; later calls
    /// return the same `Arc`. Concurrent first calls wait for a single fetch.
    /// A collection the workspace does not advertise is `Ok(None)`, also
    /// remembered. Failed fetches are not remembered.
    pub async fn collection(&self, kind: CollectionKind) -> Result<Option<Arc<Collection>>> {
        let cell = &self.collections[kind.index()];
        let collection = cell
            .get_or_try_init(|| async move {
                let Some(href) = kind.find_href(&self.workspace) else {
                    tracing::debug!(collection = %kind, "Collection not advertised");
                    return Ok(None);
                };

                crate::log_fetch!("collection", kind, href);
                let response = self.transport.get(href).await?;
                Ok::<_, CmisError>(Some(Arc::new(Collection::new(kind, href, response))))
            })
            .await?;

        Ok(collection.clone())
    }

    /// Children of the root folder
    pub async fn root(&self) -> Result<Option<Arc<Collection>>> {
        self.collection(CollectionKind::Root).await
    }

    /// Query collection
    pub async fn query(&self) -> Result<Option<Arc<Collection>>> {
        self.collection(CollectionKind::Query).await
    }

    /// Checked-out documents
    pub async fn checked_out(&self) -> Result<Option<Arc<Collection>>> {
        self.collection(CollectionKind::CheckedOut).await
    }

    /// Unfiled objects
    pub async fn unfiled(&self) -> Result<Option<Arc<Collection>>> {
        self.collection(CollectionKind::Unfiled).await
    }

    /// Base types
    pub async fn types(&self) -> Result<Option<Arc<Collection>>> {
        self.collection(CollectionKind::Types).await
    }

    /// Fetch an object by id and hand the entry to the factory
    ///
    /// # Errors
    ///
    /// Returns [`CmisError::MissingTemplate`] without any network access when
    /// the repository declares no `objectbyid` template.
    pub async fn object_by_id(&self, id: &ObjectId) -> Result<F::Object> {
        let entry = self.fetch_by_template(OBJECT_BY_ID, id.as_str()).await?;
        self.factory.object_from_entry(entry)
    }

    /// Fetch a type definition by id and hand the entry to the factory
    ///
    /// # Errors
    ///
    /// Returns [`CmisError::MissingTemplate`] without any network access when
    /// the repository declares no `typebyid` template.
    pub async fn type_by_id(&self, id: &TypeId) -> Result<F::ObjectType> {
        let entry = self.fetch_by_template(TYPE_BY_ID, id.as_str()).await?;
        self.factory.type_from_entry(entry)
    }

    /// The repository's root folder
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolViolation::MissingElement`] when the workspace does not
    /// declare a root folder id.
    pub async fn root_folder(&self) -> Result<F::Object> {
        let text = self
            .workspace
            .path(&[(CMIS_REST, "repositoryInfo"), (CMIS_CORE, "rootFolderId")])
            .map(|e| e.text().trim())
            .ok_or_else(|| {
                ProtocolViolation::MissingElement(
                    "cmisra:repositoryInfo/cmis:rootFolderId".to_string(),
                )
            })?;
        let id = ObjectId::new(text).map_err(ProtocolViolation::MissingElement)?;

        self.object_by_id(&id).await
    }

    /// Change the credentials of the shared transport
    pub async fn authenticate(&self, method: AuthMethod) -> Result<()> {
        self.transport.authenticate(method).await
    }

    async fn fetch_by_template(&self, kind: &str, id: &str) -> Result<RawResponse> {
        let template = self
            .pick_template(kind)
            .ok_or_else(|| CmisError::MissingTemplate(kind.to_string()))?;

        let url = fill_template(template, &HashMap::from([("id", id)]));
        crate::log_fetch!("entry", kind, url);

        self.transport.get(&url).await
    }
}

impl<F: EntryFactory> fmt::Display for Repository<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Ok(key) => write!(f, "<Repository {key}>"),
            Err(_) => f.write_str("<Repository ?>"),
        }
    }
}

impl<F: EntryFactory> fmt::Debug for Repository<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("key", &self.key.get())
            .field("templates", &self.templates.len())
            .finish_non_exhaustive()
    }
}

fn repository_key_text(workspace: &Element) -> Option<&str> {
    workspace
        .path(&[(CMIS_REST, "repositoryInfo"), (CMIS_CORE, "repositoryId")])
        .map(|e| e.text().trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingTransport {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn get(&self, url: &str) -> Result<RawResponse> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(RawResponse::new(url, "<feed/>"))
        }

        async fn authenticate(&self, _method: AuthMethod) -> Result<()> {
            Ok(())
        }
    }

    struct UrlFactory;

    impl EntryFactory for UrlFactory {
        type Object = String;
        type ObjectType = String;

        fn object_from_entry(&self, entry: RawResponse) -> Result<String> {
            Ok(entry.url)
        }

        fn type_from_entry(&self, entry: RawResponse) -> Result<String> {
            Ok(entry.url)
        }
    }

    fn workspace(id: &str) -> Element {
        Element::new(APP, "workspace")
            .with_child(
                Element::new(CMIS_REST, "repositoryInfo")
                    .with_child(Element::leaf(CMIS_CORE, "repositoryId", id))
                    .with_child(Element::leaf(CMIS_CORE, "rootFolderId", "root-1")),
            )
            .with_child(
                Element::new(APP, "collection")
                    .with_attribute("href", "http://x/types")
                    .with_child(Element::leaf(CMIS_REST, "collectionType", "types")),
            )
            .with_child(
                Element::new(CMIS_REST, "uritemplate")
                    .with_child(Element::leaf(CMIS_REST, "template", "http://x/obj?id={id}"))
                    .with_child(Element::leaf(CMIS_REST, "type", "objectbyid")),
            )
    }

    fn repository(workspace: Element) -> (Arc<CountingTransport>, Repository<UrlFactory>) {
        let transport = Arc::new(CountingTransport::default());
        let repository = Repository::new(transport.clone(), UrlFactory, workspace);
        (transport, repository)
    }

    #[test]
    fn test_key_and_display() {
        let (_, repository) = repository(workspace("A1"));
        assert_eq!(repository.key().unwrap().as_str(), "A1");
        assert_eq!(repository.to_string(), "<Repository A1>");
    }

    #[test]
    fn test_key_missing() {
        let (_, repository) = repository(Element::new(APP, "workspace"));
        let err = repository.key().unwrap_err();
        assert!(err.is_protocol_violation());
        assert_eq!(repository.to_string(), "<Repository ?>");
    }

    #[tokio::test]
    async fn test_collection_fetched_once() {
        let (transport, repository) = repository(workspace("A1"));

        let first = repository.types().await.unwrap().unwrap();
        let second = repository.types().await.unwrap().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.href, "http://x/types");
        assert_eq!(transport.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_absent_collection_is_none() {
        let (transport, repository) = repository(workspace("A1"));
        assert!(repository.query().await.unwrap().is_none());
        assert!(repository.query().await.unwrap().is_none());
        assert_eq!(transport.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_object_by_id_fills_template() {
        let (_, repository) = repository(workspace("A1"));
        let url = repository
            .object_by_id(&ObjectId::new("a b").unwrap())
            .await
            .unwrap();
        assert_eq!(url, "http://x/obj?id=a%20b");
    }

    #[tokio::test]
    async fn test_type_by_id_missing_template() {
        let (transport, repository) = repository(workspace("A1"));
        let err = repository
            .type_by_id(&TypeId::new("cmis:folder").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, CmisError::MissingTemplate(ref kind) if kind == "typebyid"));
        assert_eq!(transport.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_root_folder() {
        let (_, repository) = repository(workspace("A1"));
        assert_eq!(repository.root_folder().await.unwrap(), "http://x/obj?id=root-1");
    }

    #[test]
    fn test_from_service_document_selects_workspace() {
        let service = Element::new(APP, "service")
            .with_child(workspace("first"))
            .with_child(workspace("second"));
        let transport: Arc<dyn Transport> = Arc::new(CountingTransport::default());

        let chosen =
            Repository::from_service_document(transport.clone(), UrlFactory, &service, Some("second"))
                .unwrap();
        assert_eq!(chosen.key().unwrap().as_str(), "second");

        let default =
            Repository::from_service_document(transport.clone(), UrlFactory, &service, None).unwrap();
        assert_eq!(default.key().unwrap().as_str(), "first");

        let missing =
            Repository::from_service_document(transport, UrlFactory, &service, Some("third"));
        assert!(missing.unwrap_err().is_protocol_violation());
    }
}
