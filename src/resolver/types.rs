//! Semantic type names

use serde::{Serialize, Serializer};
use std::fmt;

/// Suffix that derives a class type's plain-data companion name
pub const PLAIN_SUFFIX: &str = "Struct";

/// Scalar kinds a leaf can resolve to
///
/// JSON values only ever infer `String`, `Integer64` and `Boolean`; the
/// other widths are reachable through explicit type annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Boolean,
    Integer8,
    Integer16,
    Integer32,
    Integer64,
    Unsigned8,
    Unsigned16,
    Unsigned32,
    Unsigned64,
    Float32,
    Float64,
}

impl ScalarType {
    /// Canonical name, as written in composite descriptors
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Boolean => "boolean",
            ScalarType::Integer8 => "integer8",
            ScalarType::Integer16 => "integer16",
            ScalarType::Integer32 => "integer32",
            ScalarType::Integer64 => "integer64",
            ScalarType::Unsigned8 => "unsigned8",
            ScalarType::Unsigned16 => "unsigned16",
            ScalarType::Unsigned32 => "unsigned32",
            ScalarType::Unsigned64 => "unsigned64",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
        }
    }

    /// Look up a scalar by canonical name or one of its common aliases
    pub fn from_name(name: &str) -> Option<Self> {
        let scalar = match name {
            "string" | "str" | "std::string" => ScalarType::String,
            "boolean" | "bool" => ScalarType::Boolean,
            "integer8" | "int8" | "int8_t" => ScalarType::Integer8,
            "integer16" | "int16" | "int16_t" => ScalarType::Integer16,
            "integer32" | "int32" | "int32_t" | "int" => ScalarType::Integer32,
            "integer64" | "int64" | "int64_t" => ScalarType::Integer64,
            "unsigned8" | "uint8" | "uint8_t" => ScalarType::Unsigned8,
            "unsigned16" | "uint16" | "uint16_t" => ScalarType::Unsigned16,
            "unsigned32" | "uint32" | "uint32_t" => ScalarType::Unsigned32,
            "unsigned64" | "uint64" | "uint64_t" => ScalarType::Unsigned64,
            "float32" | "float" => ScalarType::Float32,
            "float64" | "double" => ScalarType::Float64,
            _ => return None,
        };
        Some(scalar)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeName {
    /// Placeholder awaiting resolution from context
    #[default]
    Unresolved,
    Scalar(ScalarType),
    /// Object type, named by `:class` or by its field name
    Object(String),
    /// `ListOfScalar<T>`
    ListOfScalar(ScalarType),
    /// `ListOfObject<T, TStruct>`, holding `T`
    ListOfObject(String),
}

impl TypeName {
    pub fn object(name: impl Into<String>) -> Self {
        TypeName::Object(name.into())
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, TypeName::Unresolved)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeName::Scalar(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, TypeName::Object(_))
    }

    /// Whether this is a synthesized list descriptor
    pub fn is_composite(&self) -> bool {
        matches!(self, TypeName::ListOfScalar(_) | TypeName::ListOfObject(_))
    }

    /// The object type this name refers to, directly or as a list element
    pub fn referenced_object(&self) -> Option<&str> {
        match self {
            TypeName::Object(name) | TypeName::ListOfObject(name) => Some(name),
            _ => None,
        }
    }

    /// Element type of a composite descriptor
    pub fn element(&self) -> Option<TypeName> {
        match self {
            TypeName::ListOfScalar(scalar) => Some(TypeName::Scalar(*scalar)),
            TypeName::ListOfObject(name) => Some(TypeName::Object(name.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Unresolved => f.write_str("unresolved"),
            TypeName::Scalar(scalar) => write!(f, "{scalar}"),
            TypeName::Object(name) => f.write_str(name),
            TypeName::ListOfScalar(scalar) => write!(f, "ListOfScalar<{scalar}>"),
            TypeName::ListOfObject(name) => {
                write!(f, "ListOfObject<{name}, {name}{PLAIN_SUFFIX}>")
            }
        }
    }
}

impl Serialize for TypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Plain-data counterpart of a [`TypeName`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StorageType {
    #[default]
    Unresolved,
    Scalar(ScalarType),
    /// Named plain-data struct, normally `<Class>Struct`
    Struct(String),
    List(Box<StorageType>),
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Unresolved => f.write_str("unresolved"),
            StorageType::Scalar(scalar) => write!(f, "{scalar}"),
            StorageType::Struct(name) => f.write_str(name),
            StorageType::List(inner) => write!(f, "List<{inner}>"),
        }
    }
}

impl Serialize for StorageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
