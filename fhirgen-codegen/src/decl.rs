//! Typed declaration objects handed to the rendering layer.
//!
//! These replace a string-keyed property bag with plain value objects: the
//! emitter fills them in, the `dart` module turns them into source text.

/// The emitted representation of one class, ready for rendering.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Emitted class name.
    pub name: String,
    /// One-line summary documentation.
    pub short_doc: Option<String>,
    /// Full definition text.
    pub long_doc: Option<String>,
    /// Emitted superclass name, if the declaration extends anything.
    pub superclass: Option<String>,
    /// Fields in emission order.
    pub fields: Vec<FieldDecl>,
}

impl Declaration {
    /// Creates an open declaration with no fields and no superclass.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_doc: None,
            long_doc: None,
            superclass: None,
            fields: Vec::new(),
        }
    }
}

/// One emitted field.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// Emitted field name.
    pub name: String,
    /// Emitted element type. For collections this is the element type, not
    /// the sequence type.
    pub ty: String,
    /// Whether the field is an ordered sequence of `ty`.
    pub collection: bool,
    /// Whether the scalar type is emitted nullable.
    pub nullable: bool,
    /// Initializer expression; `None` renders a bare declaration.
    pub initializer: Option<String>,
    /// Original wire name, present only when the emitted name differs.
    pub alias: Option<String>,
    /// Attached documentation.
    pub doc: Option<String>,
}

impl FieldDecl {
    /// Creates a non-nullable scalar field with no initializer.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            collection: false,
            nullable: false,
            initializer: None,
            alias: None,
            doc: None,
        }
    }
}

/// One output unit: the declarations of a single profile.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Unit name (profile key, or manual class name).
    pub name: String,
    /// Declarations in emission order.
    pub declarations: Vec<Declaration>,
    /// Whether this unit came from the manual-class table and belongs in
    /// the fixed manual destination directory.
    pub manual: bool,
}

impl GeneratedUnit {
    /// Returns true if the unit carries no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
