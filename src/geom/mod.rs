mod points;

pub(crate) use points::Pos;
