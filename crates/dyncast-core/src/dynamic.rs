//! Type-erased values.
//!
//! [`Dynamic`] is the value a caster consumes and produces. Unlike a plain
//! `Box<dyn Any>`, every non-null `Dynamic` knows its run-time [`TypeHash`],
//! which is what dynamic casts resolve their source type from.

use std::fmt;
use std::sync::Arc;

use crate::{CastType, PrimitiveKind, TypeHash};

/// A primitive value tagged with its exact primitive kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    /// Get the primitive kind of this value.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Scalar::Bool(_) => PrimitiveKind::Bool,
            Scalar::I8(_) => PrimitiveKind::Int8,
            Scalar::I16(_) => PrimitiveKind::Int16,
            Scalar::I32(_) => PrimitiveKind::Int32,
            Scalar::I64(_) => PrimitiveKind::Int64,
            Scalar::U8(_) => PrimitiveKind::Uint8,
            Scalar::U16(_) => PrimitiveKind::Uint16,
            Scalar::U32(_) => PrimitiveKind::Uint32,
            Scalar::U64(_) => PrimitiveKind::Uint64,
            Scalar::F32(_) => PrimitiveKind::Float,
            Scalar::F64(_) => PrimitiveKind::Double,
        }
    }

    /// Get the type hash of this value's primitive type.
    pub fn type_hash(&self) -> TypeHash {
        self.kind().type_hash()
    }

    /// Integer value as `i128`, if this is an integer.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Scalar::I8(v) => Some(v as i128),
            Scalar::I16(v) => Some(v as i128),
            Scalar::I32(v) => Some(v as i128),
            Scalar::I64(v) => Some(v as i128),
            Scalar::U8(v) => Some(v as i128),
            Scalar::U16(v) => Some(v as i128),
            Scalar::U32(v) => Some(v as i128),
            Scalar::U64(v) => Some(v as i128),
            Scalar::Bool(_) | Scalar::F32(_) | Scalar::F64(_) => None,
        }
    }

    /// Float value as `f64`, if this is a float.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::F32(v) => Some(v as f64),
            Scalar::F64(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
        }
    }
}

/// An enum value: the enum's identity plus its underlying integer.
///
/// The raw value is not required to match a declared enumerator; an unchecked
/// numeric-to-enum cast may produce any bit pattern of the underlying type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumValue {
    pub type_hash: TypeHash,
    pub raw: Scalar,
}

impl EnumValue {
    pub fn new(type_hash: TypeHash, raw: Scalar) -> Self {
        Self { type_hash, raw }
    }
}

/// Shared handle to an object of a registered class.
///
/// Cloning the handle never clones the object. Reference casts return the
/// same handle, so the object's concrete type survives an upcast and can be
/// recovered by a later downcast.
#[derive(Clone)]
pub struct ObjectRef {
    type_hash: TypeHash,
    value: Arc<dyn std::any::Any + Send + Sync>,
}

impl ObjectRef {
    /// Wrap a value whose concrete type is `T`.
    pub fn new<T: CastType + Send + Sync>(value: T) -> Self {
        Self {
            type_hash: T::type_hash(),
            value: Arc::new(value),
        }
    }

    /// Wrap a value under an explicit concrete type identity.
    ///
    /// Used for host objects whose Rust payload is shared by several
    /// registered classes.
    pub fn with_type<T: std::any::Any + Send + Sync>(type_hash: TypeHash, value: T) -> Self {
        Self {
            type_hash,
            value: Arc::new(value),
        }
    }

    /// The concrete (run-time) type of the object.
    pub fn type_hash(&self) -> TypeHash {
        self.type_hash
    }

    /// Borrow the payload as `T`.
    pub fn downcast_ref<T: std::any::Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Check if two handles point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({:?})", self.type_hash)
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// A type-erased value flowing through a caster.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    /// Absent value (null reference or empty optional).
    Null,
    /// Primitive value.
    Scalar(Scalar),
    /// Enum value.
    Enum(EnumValue),
    /// Object of a registered class.
    Object(ObjectRef),
}

impl Dynamic {
    /// The run-time type of this value, or `None` for null.
    pub fn type_hash(&self) -> Option<TypeHash> {
        match self {
            Dynamic::Null => None,
            Dynamic::Scalar(s) => Some(s.type_hash()),
            Dynamic::Enum(e) => Some(e.type_hash),
            Dynamic::Object(o) => Some(o.type_hash()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Dynamic::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            Dynamic::Enum(e) => Some(*e),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Dynamic::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Short description of the value's shape, for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Dynamic::Null => "null".to_string(),
            Dynamic::Scalar(s) => s.kind().name().to_string(),
            Dynamic::Enum(e) => format!("enum {}", e.type_hash),
            Dynamic::Object(o) => format!("object {}", o.type_hash()),
        }
    }
}

impl From<Scalar> for Dynamic {
    fn from(value: Scalar) -> Self {
        Dynamic::Scalar(value)
    }
}

impl From<EnumValue> for Dynamic {
    fn from(value: EnumValue) -> Self {
        Dynamic::Enum(value)
    }
}

impl From<ObjectRef> for Dynamic {
    fn from(value: ObjectRef) -> Self {
        Dynamic::Object(value)
    }
}
