use serde::{Deserialize, Serialize};

use crate::cone::ConeModel;
use crate::id::ShapeId;
use crate::kind::{Dimension, ShapeKind};
use crate::rectangle::RectangleModel;

/// Anything stored under a [`ShapeId`].
///
/// The repository keys every entry by `id()`; the id of a value must never
/// change while it is stored.
pub trait Identified {
    fn id(&self) -> &ShapeId;
}

/// Borrowed view of a shape's metric capability set.
#[derive(Clone, Copy, Debug)]
pub enum ShapeView<'a> {
    Rectangle(&'a RectangleModel),
    Cone(&'a ConeModel),
    /// A shape with no known metric set.
    Other,
}

/// Exposes which capability set a value carries.
///
/// Consumers match on the returned [`ShapeView`] exhaustively, so adding a
/// variant forces every consumer to decide how to handle the new kind.
pub trait Classify {
    fn view(&self) -> ShapeView<'_>;
}

/// A shape of a kind with no metric set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnknownShape {
    id: ShapeId,
    name: String,
    dimension: Dimension,
}

impl UnknownShape {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            id: ShapeId::generate(ShapeKind::Unknown),
            name: ShapeKind::Unknown.to_string(),
            dimension,
        }
    }

    pub fn with_id(mut self, id: impl Into<ShapeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}

/// Every shape kind known to shapevault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(RectangleModel),
    Cone(ConeModel),
    Unknown(UnknownShape),
}

impl Shape {
    pub fn id(&self) -> &ShapeId {
        match self {
            Self::Rectangle(r) => r.id(),
            Self::Cone(c) => c.id(),
            Self::Unknown(u) => &u.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Rectangle(r) => r.name(),
            Self::Cone(c) => c.name(),
            Self::Unknown(u) => u.name(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Cone(_) => ShapeKind::Cone,
            Self::Unknown(_) => ShapeKind::Unknown,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Rectangle(r) => r.dimension(),
            Self::Cone(c) => c.dimension(),
            Self::Unknown(u) => u.dimension(),
        }
    }

    pub fn as_rectangle(&self) -> Option<&RectangleModel> {
        match self {
            Self::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_cone(&self) -> Option<&ConeModel> {
        match self {
            Self::Cone(c) => Some(c),
            _ => None,
        }
    }
}

impl From<RectangleModel> for Shape {
    fn from(r: RectangleModel) -> Self {
        Self::Rectangle(r)
    }
}

impl From<ConeModel> for Shape {
    fn from(c: ConeModel) -> Self {
        Self::Cone(c)
    }
}

impl From<UnknownShape> for Shape {
    fn from(u: UnknownShape) -> Self {
        Self::Unknown(u)
    }
}

impl Identified for Shape {
    fn id(&self) -> &ShapeId {
        Shape::id(self)
    }
}

impl Identified for RectangleModel {
    fn id(&self) -> &ShapeId {
        RectangleModel::id(self)
    }
}

impl Identified for ConeModel {
    fn id(&self) -> &ShapeId {
        ConeModel::id(self)
    }
}

impl Identified for UnknownShape {
    fn id(&self) -> &ShapeId {
        &self.id
    }
}

impl Classify for Shape {
    fn view(&self) -> ShapeView<'_> {
        match self {
            Self::Rectangle(r) => ShapeView::Rectangle(r),
            Self::Cone(c) => ShapeView::Cone(c),
            Self::Unknown(_) => ShapeView::Other,
        }
    }
}

impl Classify for RectangleModel {
    fn view(&self) -> ShapeView<'_> {
        ShapeView::Rectangle(self)
    }
}

impl Classify for ConeModel {
    fn view(&self) -> ShapeView<'_> {
        ShapeView::Cone(self)
    }
}

impl Classify for UnknownShape {
    fn view(&self) -> ShapeView<'_> {
        ShapeView::Other
    }
}
