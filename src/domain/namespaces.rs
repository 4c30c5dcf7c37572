//! XML namespaces used by the CMIS AtomPub binding

/// CMIS core namespace (`c:`), property containers and repository info leaves
pub const CMIS_CORE: &str = "http://docs.oasis-open.org/ns/cmis/core/200908/";

/// CMIS RestAtom namespace (`cra:`), collection types and URI templates
pub const CMIS_REST: &str = "http://docs.oasis-open.org/ns/cmis/restatom/200908/";

/// Atom Publishing Protocol namespace (`app:`)
pub const APP: &str = "http://www.w3.org/2007/app";

/// Atom syndication namespace (`atom:`)
pub const ATOM: &str = "http://www.w3.org/2005/Atom";
