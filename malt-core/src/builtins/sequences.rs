// malt-core - Sequence built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Sequence operations: list, list?, empty?, count

use malt_parser::MaltVal;

use crate::error::{AritySpec, Result};

use super::require_arity;

/// (list & items)
pub(crate) fn builtin_list(args: &[MaltVal]) -> Result<MaltVal> {
    Ok(MaltVal::list(args.to_vec()))
}

/// (list? x) - true only for lists, not vectors
pub(crate) fn builtin_list_p(args: &[MaltVal]) -> Result<MaltVal> {
    require_arity("list?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(matches!(args[0], MaltVal::List(_))))
}

/// (empty? coll) - false for anything that is not a sequence
pub(crate) fn builtin_empty_p(args: &[MaltVal]) -> Result<MaltVal> {
    require_arity("empty?", AritySpec::Exact(1), args)?;
    Ok(MaltVal::bool(args[0].sequence_len() == Some(0)))
}

/// (count coll) - 0 for anything that is not a sequence
pub(crate) fn builtin_count(args: &[MaltVal]) -> Result<MaltVal> {
    require_arity("count", AritySpec::Exact(1), args)?;
    let len = args[0].sequence_len().unwrap_or(0);
    Ok(MaltVal::number(i64::try_from(len).unwrap_or(i64::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_list() {
        let list = builtin_list(&[MaltVal::number(1), MaltVal::number(2)]).unwrap();
        assert!(matches!(list, MaltVal::List(ref items) if items.len() == 2));
        assert!(matches!(builtin_list(&[]).unwrap(), MaltVal::List(ref items) if items.is_empty()));
    }

    #[test]
    fn test_list_p() {
        assert_eq!(
            builtin_list_p(&[MaltVal::empty_list()]).unwrap(),
            MaltVal::bool(true)
        );
        assert_eq!(
            builtin_list_p(&[MaltVal::vector(vec![])]).unwrap(),
            MaltVal::bool(false)
        );
        assert_eq!(builtin_list_p(&[]).unwrap_err().kind(), ErrorKind::Arity);
    }

    #[test]
    fn test_empty_p() {
        assert_eq!(
            builtin_empty_p(&[MaltVal::vector(vec![])]).unwrap(),
            MaltVal::bool(true)
        );
        assert_eq!(
            builtin_empty_p(&[MaltVal::vector(vec![MaltVal::number(1)])]).unwrap(),
            MaltVal::bool(false)
        );
        assert_eq!(
            builtin_empty_p(&[MaltVal::map(vec![])]).unwrap(),
            MaltVal::bool(true)
        );
        assert_eq!(
            builtin_empty_p(&[MaltVal::Nil]).unwrap(),
            MaltVal::bool(false)
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(
            builtin_count(&[MaltVal::vector(vec![])]).unwrap(),
            MaltVal::number(0)
        );
        assert_eq!(
            builtin_count(&[MaltVal::list(vec![MaltVal::Nil, MaltVal::Nil])]).unwrap(),
            MaltVal::number(2)
        );
        assert_eq!(
            builtin_count(&[MaltVal::map(vec![(MaltVal::keyword("a"), MaltVal::number(1))])])
                .unwrap(),
            MaltVal::number(1)
        );
        assert_eq!(builtin_count(&[MaltVal::Nil]).unwrap(), MaltVal::number(0));
        assert_eq!(
            builtin_count(&[MaltVal::string("abc")]).unwrap(),
            MaltVal::number(0)
        );
        assert_eq!(
            builtin_count(&[MaltVal::Nil, MaltVal::Nil]).unwrap_err().kind(),
            ErrorKind::Arity
        );
    }
}
