//! # SQL Keyword Table
//!
//! Case-folded identifier to keyword resolution. Keywords are matched with
//! a compile-time perfect hash map (phf crate), giving O(1) lookup with no
//! collisions; the map is keyed by the canonical lowercase spelling, so
//! callers fold case before looking up.
//!
//! Each keyword carries a reservation category. The scanner itself does
//! not act on categories, but a downstream grammar distinguishes where a
//! keyword may double as an identifier, so the table preserves them.

use phf::phf_map;

/// How strongly a keyword is reserved against use as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    Unreserved,
    /// Usable as a column or table name, not as a function or type name.
    ColName,
    /// Usable as a function or type name, not as a column name.
    TypeFuncName,
    Reserved,
}

macro_rules! keywords {
    ($(($text:literal, $variant:ident, $category:ident)),* $(,)?) => {
        /// Every keyword the scanner recognizes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant,)*
        }

        static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
            $($text => Keyword::$variant,)*
        };

        impl Keyword {
            /// Canonical lowercase spelling, borrowed for the process
            /// lifetime; token payloads reference it directly.
            pub fn canonical(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            pub fn category(self) -> KeywordCategory {
                match self {
                    $(Keyword::$variant => KeywordCategory::$category,)*
                }
            }
        }
    };
}

keywords! {
    ("abort", Abort, Unreserved),
    ("add", Add, Unreserved),
    ("after", After, Unreserved),
    ("all", All, Reserved),
    ("alter", Alter, Unreserved),
    ("always", Always, Unreserved),
    ("analyse", Analyse, Reserved),
    ("analyze", Analyze, Reserved),
    ("and", And, Reserved),
    ("any", Any, Reserved),
    ("array", Array, Reserved),
    ("as", As, Reserved),
    ("asc", Asc, Reserved),
    ("asymmetric", Asymmetric, Reserved),
    ("begin", Begin, Unreserved),
    ("between", Between, ColName),
    ("bigint", Bigint, ColName),
    ("binary", Binary, TypeFuncName),
    ("bit", Bit, ColName),
    ("boolean", Boolean, ColName),
    ("both", Both, Reserved),
    ("by", By, Unreserved),
    ("cascade", Cascade, Unreserved),
    ("case", Case, Reserved),
    ("cast", Cast, Reserved),
    ("char", Char, ColName),
    ("character", Character, ColName),
    ("check", Check, Reserved),
    ("coalesce", Coalesce, ColName),
    ("collate", Collate, Reserved),
    ("column", Column, Reserved),
    ("comment", Comment, Unreserved),
    ("commit", Commit, Unreserved),
    ("concurrently", Concurrently, TypeFuncName),
    ("constraint", Constraint, Reserved),
    ("copy", Copy, Unreserved),
    ("create", Create, Reserved),
    ("cross", Cross, TypeFuncName),
    ("current_catalog", CurrentCatalog, Reserved),
    ("current_date", CurrentDate, Reserved),
    ("current_role", CurrentRole, Reserved),
    ("current_schema", CurrentSchema, TypeFuncName),
    ("current_time", CurrentTime, Reserved),
    ("current_timestamp", CurrentTimestamp, Reserved),
    ("current_user", CurrentUser, Reserved),
    ("cursor", Cursor, Unreserved),
    ("cycle", Cycle, Unreserved),
    ("data", Data, Unreserved),
    ("database", Database, Unreserved),
    ("day", Day, Unreserved),
    ("dec", Dec, ColName),
    ("decimal", Decimal, ColName),
    ("declare", Declare, Unreserved),
    ("default", Default, Reserved),
    ("deferrable", Deferrable, Reserved),
    ("deferred", Deferred, Unreserved),
    ("delete", Delete, Unreserved),
    ("desc", Desc, Reserved),
    ("distinct", Distinct, Reserved),
    ("do", Do, Reserved),
    ("drop", Drop, Unreserved),
    ("else", Else, Reserved),
    ("end", End, Reserved),
    ("enum", Enum, Unreserved),
    ("escape", Escape, Unreserved),
    ("except", Except, Reserved),
    ("execute", Execute, Unreserved),
    ("exists", Exists, ColName),
    ("explain", Explain, Unreserved),
    ("extract", Extract, ColName),
    ("false", False, Reserved),
    ("fetch", Fetch, Reserved),
    ("first", First, Unreserved),
    ("float", Float, ColName),
    ("following", Following, Unreserved),
    ("for", For, Reserved),
    ("foreign", Foreign, Reserved),
    ("freeze", Freeze, TypeFuncName),
    ("from", From, Reserved),
    ("full", Full, TypeFuncName),
    ("function", Function, Unreserved),
    ("grant", Grant, Reserved),
    ("greatest", Greatest, ColName),
    ("group", Group, Reserved),
    ("grouping", Grouping, ColName),
    ("having", Having, Reserved),
    ("hour", Hour, Unreserved),
    ("identity", Identity, Unreserved),
    ("if", If, Unreserved),
    ("ilike", Ilike, TypeFuncName),
    ("immediate", Immediate, Unreserved),
    ("in", In, Reserved),
    ("index", Index, Unreserved),
    ("initially", Initially, Reserved),
    ("inner", Inner, TypeFuncName),
    ("inout", Inout, ColName),
    ("insert", Insert, Unreserved),
    ("int", Int, ColName),
    ("integer", Integer, ColName),
    ("intersect", Intersect, Reserved),
    ("interval", Interval, ColName),
    ("into", Into, Reserved),
    ("is", Is, TypeFuncName),
    ("isnull", Isnull, TypeFuncName),
    ("isolation", Isolation, Unreserved),
    ("join", Join, TypeFuncName),
    ("key", Key, Unreserved),
    ("language", Language, Unreserved),
    ("last", Last, Unreserved),
    ("lateral", Lateral, Reserved),
    ("leading", Leading, Reserved),
    ("least", Least, ColName),
    ("left", Left, TypeFuncName),
    ("level", Level, Unreserved),
    ("like", Like, TypeFuncName),
    ("limit", Limit, Reserved),
    ("local", Local, Unreserved),
    ("localtime", Localtime, Reserved),
    ("localtimestamp", Localtimestamp, Reserved),
    ("match", Match, Unreserved),
    ("materialized", Materialized, Unreserved),
    ("minute", Minute, Unreserved),
    ("month", Month, Unreserved),
    ("national", National, ColName),
    ("natural", Natural, TypeFuncName),
    ("nchar", Nchar, ColName),
    ("next", Next, Unreserved),
    ("no", No, Unreserved),
    ("none", None, ColName),
    ("not", Not, Reserved),
    ("nothing", Nothing, Unreserved),
    ("notnull", Notnull, TypeFuncName),
    ("nowait", Nowait, Unreserved),
    ("null", Null, Reserved),
    ("nullif", Nullif, ColName),
    ("nulls", Nulls, Unreserved),
    ("numeric", Numeric, ColName),
    ("of", Of, Unreserved),
    ("off", Off, Unreserved),
    ("offset", Offset, Reserved),
    ("on", On, Reserved),
    ("only", Only, Reserved),
    ("option", Option, Unreserved),
    ("or", Or, Reserved),
    ("order", Order, Reserved),
    ("ordinality", Ordinality, Unreserved),
    ("out", Out, ColName),
    ("outer", Outer, TypeFuncName),
    ("over", Over, Unreserved),
    ("overlaps", Overlaps, TypeFuncName),
    ("overlay", Overlay, ColName),
    ("partial", Partial, Unreserved),
    ("partition", Partition, Unreserved),
    ("placing", Placing, Reserved),
    ("position", Position, ColName),
    ("preceding", Preceding, Unreserved),
    ("precision", Precision, ColName),
    ("prepare", Prepare, Unreserved),
    ("primary", Primary, Reserved),
    ("privileges", Privileges, Unreserved),
    ("procedure", Procedure, Unreserved),
    ("range", Range, Unreserved),
    ("read", Read, Unreserved),
    ("real", Real, ColName),
    ("recursive", Recursive, Unreserved),
    ("references", References, Reserved),
    ("refresh", Refresh, Unreserved),
    ("reindex", Reindex, Unreserved),
    ("release", Release, Unreserved),
    ("rename", Rename, Unreserved),
    ("repeatable", Repeatable, Unreserved),
    ("replace", Replace, Unreserved),
    ("reset", Reset, Unreserved),
    ("restart", Restart, Unreserved),
    ("restrict", Restrict, Unreserved),
    ("returning", Returning, Reserved),
    ("returns", Returns, Unreserved),
    ("revoke", Revoke, Unreserved),
    ("right", Right, TypeFuncName),
    ("role", Role, Unreserved),
    ("rollback", Rollback, Unreserved),
    ("row", Row, ColName),
    ("rows", Rows, Unreserved),
    ("savepoint", Savepoint, Unreserved),
    ("schema", Schema, Unreserved),
    ("second", Second, Unreserved),
    ("select", Select, Reserved),
    ("sequence", Sequence, Unreserved),
    ("serializable", Serializable, Unreserved),
    ("session", Session, Unreserved),
    ("session_user", SessionUser, Reserved),
    ("set", Set, Unreserved),
    ("setof", Setof, ColName),
    ("share", Share, Unreserved),
    ("show", Show, Unreserved),
    ("similar", Similar, TypeFuncName),
    ("simple", Simple, Unreserved),
    ("skip", Skip, Unreserved),
    ("smallint", Smallint, ColName),
    ("snapshot", Snapshot, Unreserved),
    ("some", Some, Reserved),
    ("start", Start, Unreserved),
    ("statement", Statement, Unreserved),
    ("statistics", Statistics, Unreserved),
    ("stdin", Stdin, Unreserved),
    ("stdout", Stdout, Unreserved),
    ("storage", Storage, Unreserved),
    ("substring", Substring, ColName),
    ("symmetric", Symmetric, Reserved),
    ("table", Table, Reserved),
    ("tablesample", Tablesample, TypeFuncName),
    ("temp", Temp, Unreserved),
    ("temporary", Temporary, Unreserved),
    ("text", Text, Unreserved),
    ("then", Then, Reserved),
    ("time", Time, ColName),
    ("timestamp", Timestamp, ColName),
    ("to", To, Reserved),
    ("trailing", Trailing, Reserved),
    ("transaction", Transaction, Unreserved),
    ("treat", Treat, ColName),
    ("trigger", Trigger, Unreserved),
    ("trim", Trim, ColName),
    ("true", True, Reserved),
    ("truncate", Truncate, Unreserved),
    ("type", Type, Unreserved),
    ("uescape", Uescape, Unreserved),
    ("unbounded", Unbounded, Unreserved),
    ("uncommitted", Uncommitted, Unreserved),
    ("union", Union, Reserved),
    ("unique", Unique, Reserved),
    ("unlogged", Unlogged, Unreserved),
    ("until", Until, Unreserved),
    ("update", Update, Unreserved),
    ("user", User, Reserved),
    ("using", Using, Reserved),
    ("vacuum", Vacuum, Unreserved),
    ("valid", Valid, Unreserved),
    ("value", Value, Unreserved),
    ("values", Values, ColName),
    ("varchar", Varchar, ColName),
    ("variadic", Variadic, Reserved),
    ("varying", Varying, Unreserved),
    ("verbose", Verbose, TypeFuncName),
    ("view", View, Unreserved),
    ("when", When, Reserved),
    ("where", Where, Reserved),
    ("window", Window, Reserved),
    ("with", With, Reserved),
    ("within", Within, Unreserved),
    ("without", Without, Unreserved),
    ("work", Work, Unreserved),
    ("write", Write, Unreserved),
    ("year", Year, Unreserved),
    ("zone", Zone, Unreserved),
}

/// Resolves a case-folded (lowercase) identifier to a keyword.
pub fn lookup(folded: &str) -> Option<Keyword> {
    KEYWORDS.get(folded).copied()
}
