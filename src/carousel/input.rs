/// Everything the carousel reacts to, one variant per input channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    PreviousControl,
    NextControl,
    /// The indicator at this index was clicked.
    Indicator(usize),
    ArrowLeft,
    ArrowRight,
    /// A drag started on the track at this x coordinate.
    GestureStart { x: f32 },
    /// A drag ended at this x coordinate.
    GestureEnd { x: f32 },
    PointerEnter,
    PointerLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advance,
    Retreat,
    JumpTo(usize),
}
