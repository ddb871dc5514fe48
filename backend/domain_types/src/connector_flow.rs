#[derive(Debug, Clone)]
pub struct CreateInteraction;

#[derive(Debug, Clone)]
pub struct DirectPayment;

#[derive(Debug, Clone)]
pub struct PSync;

#[derive(Debug, Clone)]
pub struct InteractionSync;
