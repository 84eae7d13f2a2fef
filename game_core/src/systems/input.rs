use hecs::World;

use crate::{InputSnapshot, PaddleIntent};

/// Copy the frame's input snapshot onto the human paddle's intent. The
/// snapshot itself is never mutated here.
pub fn apply_input(world: &mut World, input: &InputSnapshot) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = input.dir;
    }
}
