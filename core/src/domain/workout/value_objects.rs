#[derive(Debug, Clone, Default)]
pub struct CreateWorkoutInput {
    pub name: String,
    pub items: Vec<String>,
}
