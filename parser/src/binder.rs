//! Resolution of declarations against the partition.
//!
//! Every binding call follows the same shape: record the descriptor in the
//! registry (validation and duplicate-key errors surface here, before any
//! input is looked at), then resolve its keys against the partition, claim
//! value tokens, convert, and assign. The target is only written once every
//! step has succeeded.

use std::fmt::Display;
use std::str::FromStr;

use clarg_core::{
    ConversionError, Descriptor, Error, Kind, Registry, Requirement, Result, Scope, convert,
    convert_count,
};
use tracing::{debug, warn};

use crate::{ErrorMode, Partition, ParserConfig};

/// Parse state shared by a parser and its groups.
#[derive(Debug)]
pub struct Session {
    pub(crate) mode: ErrorMode,
    pub(crate) terminator: String,
    pub(crate) registry: Registry,
    pub(crate) partition: Option<Partition>,
    pub(crate) errors: Vec<Error>,
}

/// Lookup keys of a descriptor that has been handed to the registry.
struct Keys {
    short: Option<char>,
    long: Option<String>,
    requirement: Requirement,
    name: String,
}

impl Keys {
    fn of(desc: &Descriptor) -> Self {
        Self {
            short: desc.short,
            long: desc.long.clone(),
            requirement: desc.requirement,
            name: desc.display_name(),
        }
    }

    fn conversion(&self) -> impl FnOnce(ConversionError) -> Error + '_ {
        move |source| Error::Conversion {
            argument: self.name.clone(),
            source,
        }
    }
}

impl Session {
    pub(crate) fn new(config: &ParserConfig) -> Self {
        Self {
            mode: config.error_mode,
            terminator: config.terminator.clone(),
            registry: Registry::new(),
            partition: None,
            errors: Vec::new(),
        }
    }

    /// Applies the error discipline to the outcome of one call: fail fast
    /// hands the error back, accumulate records it and carries on.
    pub(crate) fn settle(&mut self, outcome: Result<()>) -> Result<()> {
        let Err(err) = outcome else {
            return Ok(());
        };
        match self.mode {
            ErrorMode::FailFast => Err(err),
            ErrorMode::Accumulate => {
                warn!(error = %err, "Recorded argument error");
                self.errors.push(err);
                Ok(())
            }
        }
    }

    fn partition(&mut self, name: &str) -> Result<&mut Partition> {
        self.partition
            .as_mut()
            .ok_or_else(|| Error::NotParsed(name.to_string()))
    }

    pub(crate) fn flag(
        &mut self,
        scope: Scope,
        desc: Descriptor,
        target: &mut bool,
        inverted: bool,
    ) -> Result<()> {
        let desc = if inverted {
            desc.with_default("true")
        } else {
            desc
        };
        let keys = Keys::of(&desc);
        self.registry.declare(scope, desc)?;

        let partition = self.partition(&keys.name)?;
        let found = get_arg(partition, &keys)?.is_some();
        *target = found != inverted;
        Ok(())
    }

    pub(crate) fn count<T>(&mut self, scope: Scope, desc: Descriptor, target: &mut T) -> Result<()>
    where
        T: TryFrom<usize>,
        T::Error: Display,
    {
        let keys = Keys::of(&desc);
        self.registry.declare(scope, desc)?;

        let partition = self.partition(&keys.name)?;
        let Some(indices) = get_arg(partition, &keys)? else {
            return Ok(());
        };
        *target = convert_count(indices.len()).map_err(keys.conversion())?;
        Ok(())
    }

    pub(crate) fn arg<T>(&mut self, scope: Scope, mut desc: Descriptor, target: &mut T) -> Result<()>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        if desc.kind == Kind::Defaulted && desc.default.is_empty() {
            desc.default = target.to_string();
        }
        let keys = Keys::of(&desc);
        self.registry.declare(scope, desc)?;

        let partition = self.partition(&keys.name)?;
        let Some(indices) = get_arg(partition, &keys)? else {
            return Ok(());
        };
        let Some((&last, earlier)) = indices.split_last() else {
            return Ok(());
        };

        for &index in earlier {
            let dropped = claim_value(partition, index, &keys)?;
            debug!(argument = %keys.name, value = partition.token(dropped), "Dropped earlier value");
        }
        let slot = claim_value(partition, last, &keys)?;
        let raw = partition.token(slot);
        *target = convert(raw).map_err(keys.conversion())?;
        debug!(argument = %keys.name, value = raw, "Bound argument");
        Ok(())
    }

    pub(crate) fn list<T>(
        &mut self,
        scope: Scope,
        desc: Descriptor,
        target: &mut Vec<T>,
    ) -> Result<()>
    where
        T: FromStr,
        T::Err: Display,
    {
        let keys = Keys::of(&desc);
        self.registry.declare(scope, desc)?;

        let partition = self.partition(&keys.name)?;
        let Some(indices) = get_arg(partition, &keys)? else {
            return Ok(());
        };

        let mut values = Vec::with_capacity(indices.len());
        for index in indices {
            let slot = claim_value(partition, index, &keys)?;
            values.push(convert(partition.token(slot)).map_err(keys.conversion())?);
        }
        debug!(argument = %keys.name, count = values.len(), "Bound argument list");
        target.extend(values);
        Ok(())
    }

    pub(crate) fn pos<T>(&mut self, desc: Descriptor, target: &mut T) -> Result<()>
    where
        T: FromStr,
        T::Err: Display,
    {
        let keys = Keys::of(&desc);
        self.registry.declare_positional(desc)?;

        let partition = self.partition(&keys.name)?;
        let slot = partition
            .pop_first()
            .ok_or_else(|| Error::MissingPositional(keys.name.clone()))?;
        let raw = partition.token(slot);
        *target = convert(raw).map_err(keys.conversion())?;
        debug!(argument = %keys.name, index = slot, value = raw, "Bound positional");
        Ok(())
    }

    pub(crate) fn gather<T>(&mut self, target: &mut Vec<T>) -> Result<()>
    where
        T: FromStr,
        T::Err: Display,
    {
        let partition = self.partition("remaining positionals")?;
        let values = partition
            .drain()
            .into_iter()
            .map(|slot| convert(partition.token(slot)))
            .collect::<std::result::Result<Vec<T>, _>>()
            .map_err(|source| Error::Conversion {
                argument: "unnamed positional".to_string(),
                source,
            })?;
        debug!(count = values.len(), "Gathered positionals");
        target.extend(values);
        Ok(())
    }

    pub(crate) fn unclaimed(&self) -> usize {
        self.partition.as_ref().map_or(0, Partition::unclaimed)
    }
}

/// Resolves a descriptor's keys, short key first. The matched key's
/// occurrences are consumed.
fn get_arg(partition: &mut Partition, keys: &Keys) -> Result<Option<Vec<usize>>> {
    let mut found = keys
        .short
        .and_then(|short| partition.take_supplied(&short.to_string()));
    if found.is_none() {
        if let Some(long) = keys.long.as_deref() {
            found = partition.take_supplied(long);
        }
    }

    match found {
        Some(indices) => {
            debug!(argument = %keys.name, occurrences = indices.len(), "Resolved argument");
            Ok(Some(indices))
        }
        None if keys.requirement == Requirement::Required => {
            Err(Error::UnsetArgument(keys.name.clone()))
        }
        None => Ok(None),
    }
}

/// Claims the value token directly after the option at `index`.
fn claim_value(partition: &mut Partition, index: usize, keys: &Keys) -> Result<usize> {
    partition
        .get_and_pop_pos(index)
        .ok_or_else(|| Error::MissingValue(keys.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(tokens: &[&str], mode: ErrorMode) -> Session {
        let config = ParserConfig {
            error_mode: mode,
            ..ParserConfig::default()
        };
        let mut session = Session::new(&config);
        let (partition, err) =
            Partition::classify(tokens.iter().map(|t| t.to_string()).collect(), "--");
        assert!(err.is_none());
        session.partition = Some(partition);
        session
    }

    #[test]
    fn test_flag_presence_and_inversion() {
        let mut s = session(&["-q"], ErrorMode::FailFast);
        let mut quiet = false;
        let mut color = false;
        s.flag(Scope::Main, Descriptor::short('q', ""), &mut quiet, false)
            .unwrap();
        s.flag(Scope::Main, Descriptor::long("no-color", ""), &mut color, true)
            .unwrap();

        assert!(quiet);
        // inverted and absent: the flag reads as its inversion
        assert!(color);
        assert_eq!(s.registry.options()[1].default, "true");
    }

    #[test]
    fn test_flag_never_consumes_positional() {
        let mut s = session(&["-h", "parse"], ErrorMode::FailFast);
        let mut help = false;
        s.flag(Scope::Main, Descriptor::short('h', ""), &mut help, false)
            .unwrap();
        assert!(help);
        assert_eq!(s.unclaimed(), 1);
    }

    #[test]
    fn test_count_absent_leaves_target() {
        let mut s = session(&[], ErrorMode::FailFast);
        let mut verbosity: u8 = 2;
        s.count(Scope::Main, Descriptor::short('v', ""), &mut verbosity)
            .unwrap();
        assert_eq!(verbosity, 2);
    }

    #[test]
    fn test_count_required_absent() {
        let mut s = session(&[], ErrorMode::FailFast);
        let mut n: u32 = 0;
        let err = s
            .count(Scope::Main, Descriptor::short('v', "").required(), &mut n)
            .unwrap_err();
        assert_eq!(err, Error::UnsetArgument("-v".to_string()));
    }

    #[test]
    fn test_count_overflow_is_conversion_error() {
        let tokens = vec!["-".to_string() + &"v".repeat(300)];
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let mut s = session(&refs, ErrorMode::FailFast);
        let mut n: u8 = 0;
        let err = s
            .count(Scope::Main, Descriptor::short('v', ""), &mut n)
            .unwrap_err();
        assert!(matches!(err, Error::Conversion { .. }));
        assert_eq!(n, 0);
    }

    #[test]
    fn test_arg_last_wins() {
        let mut s = session(&["-o", "first", "--output", "second", "rest"], ErrorMode::FailFast);
        let mut output = String::new();
        s.arg(Scope::Main, Descriptor::short_long('o', "output", ""), &mut output)
            .unwrap();
        // short key is resolved first, so `--output` stays unresolved
        assert_eq!(output, "first");

        let mut s = session(&["-o", "first", "-o", "second", "rest"], ErrorMode::FailFast);
        let mut output = String::new();
        s.arg(Scope::Main, Descriptor::short_long('o', "output", ""), &mut output)
            .unwrap();
        assert_eq!(output, "second");
        // both values were claimed; only `rest` is left
        assert_eq!(s.unclaimed(), 1);
    }

    #[test]
    fn test_arg_defaulted_records_current_value() {
        let mut s = session(&[], ErrorMode::FailFast);
        let mut output = "a.out".to_string();
        s.arg(
            Scope::Main,
            Descriptor::short_long('o', "output", "").defaulted(),
            &mut output,
        )
        .unwrap();
        assert_eq!(s.registry.options()[0].default, "a.out");
    }

    #[test]
    fn test_arg_missing_value() {
        let mut s = session(&["-o", "-v"], ErrorMode::FailFast);
        let mut output = String::new();
        let err = s
            .arg(Scope::Main, Descriptor::short_long('o', "output", ""), &mut output)
            .unwrap_err();
        assert_eq!(err, Error::MissingValue("-o/--output".to_string()));
    }

    #[test]
    fn test_list_preserves_order() {
        let mut s = session(&["-W", "all", "-W", "abi", "-W", "inline"], ErrorMode::FailFast);
        let mut warnings: Vec<String> = Vec::new();
        s.list(Scope::Main, Descriptor::short_long('W', "warn", ""), &mut warnings)
            .unwrap();
        assert_eq!(warnings, vec!["all", "abi", "inline"]);
    }

    #[test]
    fn test_list_failure_appends_nothing() {
        let mut s = session(&["-n", "1", "-n", "x"], ErrorMode::FailFast);
        let mut numbers: Vec<u32> = vec![7];
        assert!(
            s.list(Scope::Main, Descriptor::short('n', ""), &mut numbers)
                .is_err()
        );
        assert_eq!(numbers, vec![7]);
    }

    #[test]
    fn test_pos_then_gather() {
        let mut s = session(&["parse", "one", "two"], ErrorMode::FailFast);
        let mut command = String::new();
        let mut rest: Vec<String> = Vec::new();
        s.pos(Descriptor::positional("subcommand", ""), &mut command)
            .unwrap();
        s.gather(&mut rest).unwrap();
        assert_eq!(command, "parse");
        assert_eq!(rest, vec!["one", "two"]);

        let err = s
            .pos(Descriptor::positional("file", ""), &mut command)
            .unwrap_err();
        assert_eq!(err, Error::MissingPositional("file".to_string()));
    }

    #[test]
    fn test_not_parsed_still_records() {
        let mut s = Session::new(&ParserConfig::default());
        let mut help = false;
        let err = s
            .flag(Scope::Main, Descriptor::short('h', ""), &mut help, false)
            .unwrap_err();
        assert_eq!(err, Error::NotParsed("-h".to_string()));
        assert_eq!(s.registry.options().len(), 1);
        assert_eq!(s.unclaimed(), 0);
    }

    #[test]
    fn test_settle_by_mode() {
        let mut s = session(&[], ErrorMode::FailFast);
        assert!(s.settle(Err(Error::UnsetArgument("-x".into()))).is_err());
        assert!(s.errors.is_empty());

        let mut s = session(&[], ErrorMode::Accumulate);
        assert!(s.settle(Err(Error::UnsetArgument("-x".into()))).is_ok());
        assert!(s.settle(Ok(())).is_ok());
        assert_eq!(s.errors, vec![Error::UnsetArgument("-x".into())]);
    }
}
