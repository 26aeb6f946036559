//! Centralized constants for application properties loading.
//!
//! Default location sources live here to avoid magic string duplication
//! between the default location set and the tests that exercise it.

/// Default resource path of the plain-text properties file.
pub const CLASSPATH_PLAIN_SOURCE: &str = "/WEB-INF/application.properties";

/// Default resource path of the XML properties file.
pub const CLASSPATH_XML_SOURCE: &str = "/WEB-INF/applicationProperties.xml";

/// Name of the environment variable that redirects property loading to an
/// arbitrary file. Takes effect only if set; this is how properties are
/// overridden per server.
pub const OVERRIDE_PATH_VARIABLE: &str = "application.properties.path";
