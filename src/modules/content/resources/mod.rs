pub mod experience;
pub mod project;
pub mod reference;
pub mod skill;
pub mod tech_stack;
