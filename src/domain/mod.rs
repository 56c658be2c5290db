// Domain layer: the collaborator capabilities the User aggregate is built from.

pub mod ports;
