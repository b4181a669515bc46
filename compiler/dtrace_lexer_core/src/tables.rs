//! Classification tables for identifier-shaped tokens.
//!
//! Two immutable tables decide what an identifier run is:
//! 1. [`KEYWORDS`]: reserved words of the D language
//! 2. [`BUILTINS`]: names DTrace predefines, such as builtin variables (`pid`,
//!    `probefunc`, `arg0`..`arg9`), tracing functions (`trace`, `printf`),
//!    aggregating functions (`count`, `quantize`), builtin functions
//!    (`copyinstr`, `strlen`) and builtin types (`uint64_t`, `psinfo_t`)
//!
//! Both tables are sorted by byte order so lookup is a binary search over a
//! `const` slice: no allocation, no initialization, safe to share between
//! threads. The tables are disjoint, so lookup order only matters for
//! documentation: keywords first, then builtins, then plain identifier.
//! Matching is exact and case-sensitive (`NULL` is a builtin, `null` is not).

use crate::TokenKind;

/// Reserved words, sorted by byte order.
pub const KEYWORDS: &[&str] = &[
    "char", "const", "double", "enum", "float", "inline", "int", "long", "self", "short", "string",
    "struct", "this", "typedef", "void",
];

/// DTrace builtin names, sorted by byte order (`NULL` sorts first).
pub const BUILTINS: &[&str] = &[
    "NULL",
    "arg0",
    "arg1",
    "arg2",
    "arg3",
    "arg4",
    "arg5",
    "arg6",
    "arg7",
    "arg8",
    "arg9",
    "args",
    "avg",
    "breakpoint",
    "caller",
    "chill",
    "chipid_t",
    "clear",
    "commit",
    "copyin",
    "copyinstr",
    "copyout",
    "copyoutstr",
    "count",
    "cpuinfo_t",
    "curlwpsinfo",
    "curpsinfo",
    "curthread",
    "discard",
    "epid",
    "errno",
    "execname",
    "exit",
    "fds",
    "gid_t",
    "id",
    "id_t",
    "int32_t",
    "int64_t",
    "intptr_t",
    "ipl",
    "kmutex_t",
    "krwlock_t",
    "kthread_t",
    "lgrp_id_t",
    "lquantize",
    "lwpsinfo_t",
    "max",
    "min",
    "mutex_owned",
    "mutex_owner",
    "mutex_type_adaptive",
    "mutex_type_spin",
    "offsetof",
    "panic",
    "pid",
    "printa",
    "printf",
    "probefunc",
    "probemod",
    "probename",
    "probeprov",
    "processorid_t",
    "progenyof",
    "psetid_t",
    "psinfo_t",
    "quantize",
    "raise",
    "rand",
    "rw_iswriter",
    "rw_read_held",
    "rw_write_held",
    "size_t",
    "sizeof",
    "speculate",
    "speculation",
    "stack",
    "stackdepth",
    "stop",
    "stringof",
    "strjoin",
    "strlen",
    "sum",
    "tid",
    "timestamp",
    "trace",
    "tracemem",
    "trunc",
    "uid_t",
    "uint32_t",
    "uint64_t",
    "uint_t",
    "uintptr_t",
    "ustack",
    "vtimestamp",
    "walltimestamp",
];

/// Returns `true` if `text` is a reserved word.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.binary_search(&text).is_ok()
}

/// Returns `true` if `text` is a DTrace builtin name.
#[inline]
pub fn is_builtin(text: &str) -> bool {
    BUILTINS.binary_search(&text).is_ok()
}

/// Classify identifier-shaped text as keyword, builtin or identifier.
pub fn classify(text: &str) -> TokenKind {
    if is_keyword(text) {
        TokenKind::Keyword
    } else if is_builtin(text) {
        TokenKind::Builtin
    } else {
        TokenKind::Identifier
    }
}
