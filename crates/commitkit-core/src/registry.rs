//! Enum discriminant registry and resolution.
//!
//! The on-chain program numbers enum variants by their declaration order.
//! That order cannot be recovered from variant names, so it is always
//! supplied explicitly: the index of a name in its registered list is its
//! discriminant.
//!
//! Two sources are consulted, in this order:
//! - a per-call context (an [`EnumRegistry`] passed alongside the value)
//! - a base registry: an explicit one if the caller supplied it, otherwise the
//!   process-wide registry populated through [`register`]
//!
//! Unknown types and unknown variant names are hard errors.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use parking_lot::{RwLock, RwLockReadGuard};
use tracing::{debug, warn};

use crate::errors::{CommitError, CommitResult};

/// Maximum number of variants a single enum may declare (one discriminant byte).
pub const MAX_VARIANTS: usize = 256;

/// Enum type name -> variant names in declaration order.
///
/// Iteration order over types is deterministic (`BTreeMap`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumRegistry {
    enums: BTreeMap<String, Vec<String>>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    /// Register (or replace) the declared variant order for `type_name`.
    ///
    /// Fails without modifying the registry if the type name is empty, the
    /// list exceeds [`MAX_VARIANTS`], or a variant name repeats.
    pub fn register<I, S>(&mut self, type_name: &str, variants: I) -> CommitResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
        validate_registration(type_name, &variants)?;
        self.insert_checked(type_name, variants);
        Ok(())
    }

    /// Insert an already validated entry, warning when it reorders an existing one.
    fn insert_checked(&mut self, type_name: &str, variants: Vec<String>) {
        if let Some(prev) = self.enums.get(type_name) {
            if prev != &variants {
                warn!(
                    enum_type = type_name,
                    previous = ?prev,
                    replacement = ?variants,
                    "overwriting enum registration with a different variant order"
                );
            }
        }

        debug!(enum_type = type_name, variants = variants.len(), "registered enum");
        self.enums.insert(type_name.to_string(), variants);
    }

    /// Chaining form of [`EnumRegistry::register`], handy for building contexts.
    pub fn with<I, S>(mut self, type_name: &str, variants: I) -> CommitResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(type_name, variants)?;
        Ok(self)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.enums.contains_key(type_name)
    }

    pub fn variants(&self, type_name: &str) -> Option<&[String]> {
        self.enums.get(type_name).map(Vec::as_slice)
    }

    /// Discriminant of `variant_name` within `type_name`.
    ///
    /// `None` if the type is not registered here. `Some(Err(..))` if the type
    /// is registered but does not declare that variant.
    pub fn lookup(&self, type_name: &str, variant_name: &str) -> Option<CommitResult<u8>> {
        let variants = self.enums.get(type_name)?;
        Some(
            variants
                .iter()
                .position(|v| v == variant_name)
                // Registration caps the list at 256 entries, so the index fits.
                .map(|i| i as u8)
                .ok_or_else(|| CommitError::unresolved(type_name, variant_name)),
        )
    }

    /// Copy every entry of `other` into `self`, replacing same-named types.
    ///
    /// Entries of `other` were validated when it was built; reorders are
    /// logged the same way as in [`EnumRegistry::register`].
    pub fn merge(&mut self, other: &EnumRegistry) {
        for (name, variants) in &other.enums {
            self.insert_checked(name, variants.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.enums.iter()
    }
}

fn validate_registration(type_name: &str, variants: &[String]) -> CommitResult<()> {
    if type_name.is_empty() {
        return Err(CommitError::invalid_registration(
            type_name,
            "type name must not be empty",
        ));
    }
    if variants.len() > MAX_VARIANTS {
        return Err(CommitError::invalid_registration(
            type_name,
            format!(
                "{} variants declared, at most {MAX_VARIANTS} fit in one discriminant byte",
                variants.len()
            ),
        ));
    }
    for (i, v) in variants.iter().enumerate() {
        if variants[..i].contains(v) {
            return Err(CommitError::invalid_registration(
                type_name,
                format!("duplicate variant name: {v}"),
            ));
        }
    }
    Ok(())
}

static GLOBAL: OnceLock<RwLock<EnumRegistry>> = OnceLock::new();

fn global() -> &'static RwLock<EnumRegistry> {
    GLOBAL.get_or_init(|| RwLock::new(EnumRegistry::new()))
}

/// Register an enum in the process-wide registry.
///
/// Meant for the setup phase; steady-state traffic only reads.
pub fn register<I, S>(type_name: &str, variants: I) -> CommitResult<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    global().write().register(type_name, variants)
}

/// Install every entry of `registry` into the process-wide registry.
pub fn register_all(registry: &EnumRegistry) {
    global().write().merge(registry);
}

/// Read access to the process-wide registry.
pub fn global_registry() -> RwLockReadGuard<'static, EnumRegistry> {
    global().read()
}

/// Snapshot of the process-wide registry.
pub fn global_snapshot() -> EnumRegistry {
    global().read().clone()
}

/// Resolve a discriminant against an optional context, then the global registry.
pub fn resolve(type_name: &str, variant_name: &str, context: Option<&EnumRegistry>) -> CommitResult<u8> {
    Resolver::new(context).resolve(type_name, variant_name)
}

/// Resolution policy for one encode call.
///
/// Borrowed and cheap to copy; holds no lock between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<'a> {
    context: Option<&'a EnumRegistry>,
    base: Option<&'a EnumRegistry>,
}

impl<'a> Resolver<'a> {
    /// Context first, then the process-wide registry.
    pub fn new(context: Option<&'a EnumRegistry>) -> Self {
        Self {
            context,
            base: None,
        }
    }

    /// Context first, then `base`. The process-wide registry is not consulted.
    pub fn with_base(context: Option<&'a EnumRegistry>, base: &'a EnumRegistry) -> Self {
        Self {
            context,
            base: Some(base),
        }
    }

    pub fn resolve(&self, type_name: &str, variant_name: &str) -> CommitResult<u8> {
        if let Some(found) = self.context.and_then(|ctx| ctx.lookup(type_name, variant_name)) {
            return found;
        }

        let found = match self.base {
            Some(base) => base.lookup(type_name, variant_name),
            None => global_registry().lookup(type_name, variant_name),
        };

        found.unwrap_or_else(|| Err(CommitError::unresolved(type_name, variant_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted `tracing` output for assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn with_warn_logs<F: FnOnce()>(f: F) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.text()
    }

    fn directions() -> EnumRegistry {
        EnumRegistry::new()
            .with("Direction", ["North", "South", "East", "West"])
            .unwrap()
    }

    #[test]
    fn index_is_discriminant() {
        let reg = directions();
        let r = Resolver::with_base(None, &reg);
        assert_eq!(r.resolve("Direction", "North").unwrap(), 0);
        assert_eq!(r.resolve("Direction", "South").unwrap(), 1);
        assert_eq!(r.resolve("Direction", "East").unwrap(), 2);
        assert_eq!(r.resolve("Direction", "West").unwrap(), 3);
    }

    #[test]
    fn missing_variant_in_known_type_is_error() {
        let reg = directions();
        let r = Resolver::with_base(None, &reg);
        assert_matches!(
            r.resolve("Direction", "Up"),
            Err(CommitError::UnresolvedVariant { type_name, variant_name })
                if type_name == "Direction" && variant_name == "Up"
        );
    }

    #[test]
    fn unknown_type_is_error() {
        let reg = directions();
        let r = Resolver::with_base(None, &reg);
        assert_matches!(
            r.resolve("Color", "Red"),
            Err(CommitError::UnresolvedVariant { .. })
        );
    }

    #[test]
    fn context_overrides_base() {
        let base = directions();
        let ctx = EnumRegistry::new()
            .with("Direction", ["West", "East"])
            .unwrap();
        let r = Resolver::with_base(Some(&ctx), &base);
        assert_eq!(r.resolve("Direction", "West").unwrap(), 0);

        // The context owns the type, so a name it lacks is not looked up in base.
        assert_matches!(
            r.resolve("Direction", "North"),
            Err(CommitError::UnresolvedVariant { .. })
        );
    }

    #[test]
    fn context_extends_base() {
        let base = directions();
        let ctx = EnumRegistry::new().with("Color", ["Red", "Blue"]).unwrap();
        let r = Resolver::with_base(Some(&ctx), &base);
        assert_eq!(r.resolve("Color", "Blue").unwrap(), 1);
        assert_eq!(r.resolve("Direction", "East").unwrap(), 2);
    }

    #[test]
    fn reregistration_overwrites() {
        let mut reg = directions();
        reg.register("Direction", ["South", "North"]).unwrap();
        assert_eq!(reg.lookup("Direction", "North").unwrap().unwrap(), 1);
        assert_matches!(
            reg.lookup("Direction", "East"),
            Some(Err(CommitError::UnresolvedVariant { .. }))
        );
    }

    #[test]
    fn merge_warns_on_reorder() {
        let mut reg = EnumRegistry::new().with("Dir", ["North", "South"]).unwrap();
        let reordered = EnumRegistry::new().with("Dir", ["South", "North"]).unwrap();

        let logs = with_warn_logs(|| reg.merge(&reordered));
        assert!(logs.contains("different variant order"), "logs: {logs:?}");
        assert!(logs.contains("Dir"));
        assert_eq!(reg.lookup("Dir", "South").unwrap().unwrap(), 0);
    }

    #[test]
    fn merge_same_order_is_quiet() {
        let mut reg = directions();
        let logs = with_warn_logs(|| reg.merge(&directions()));
        assert_eq!(logs, "");
    }

    #[test]
    fn register_warns_on_reorder() {
        let mut reg = directions();
        let logs = with_warn_logs(|| {
            reg.register("Direction", ["West", "East", "South", "North"])
                .unwrap();
        });
        assert!(logs.contains("different variant order"), "logs: {logs:?}");
    }

    #[test]
    fn too_many_variants_rejected() {
        let mut reg = EnumRegistry::new();
        let names: Vec<String> = (0..257).map(|i| format!("V{i}")).collect();
        assert_matches!(
            reg.register("Big", names),
            Err(CommitError::InvalidRegistration { .. })
        );
        assert!(reg.is_empty());

        let names: Vec<String> = (0..256).map(|i| format!("V{i}")).collect();
        reg.register("Big", names).unwrap();
        assert_eq!(reg.lookup("Big", "V255").unwrap().unwrap(), 255);
    }

    #[test]
    fn duplicates_and_empty_name_rejected() {
        let mut reg = EnumRegistry::new();
        assert_matches!(
            reg.register("Dup", ["A", "B", "A"]),
            Err(CommitError::InvalidRegistration { .. })
        );
        assert_matches!(
            reg.register("", ["A"]),
            Err(CommitError::InvalidRegistration { .. })
        );
    }

    #[test]
    fn global_registry_fallback() {
        register("RegistryTestOnlyEnum", ["Zero", "One"]).unwrap();
        assert_eq!(resolve("RegistryTestOnlyEnum", "One", None).unwrap(), 1);

        let ctx = EnumRegistry::new()
            .with("RegistryTestOnlyEnum", ["One", "Zero"])
            .unwrap();
        assert_eq!(resolve("RegistryTestOnlyEnum", "One", Some(&ctx)).unwrap(), 0);
        assert!(global_registry().contains("RegistryTestOnlyEnum"));
    }
}
