//! Prompt text sent to the model for each capability.

use serde::Serialize;

/// System prompt used with chat backends for structured requirement output.
pub const REQUIREMENTS_SYSTEM: &str = "You are a helpful assistant that generates project \
requirements in JSON format. You strictly only generate json no leading or lagging text";

const REQUIREMENTS_SHAPE: &str = r#"{
  "epics": [
    {
      "id": "E1",
      "summary": "Epic Summary",
      "description": "Detailed description of the epic"
    }
  ],
  "tasks": [
    {
      "id": "T1",
      "summary": "Task Summary",
      "acceptanceCriteria": "Detailed acceptance criteria for the task",
      "description": "Detailed description of the task",
      "epicId": "E1"
    }
  ],
  "stories": [
    {
      "id": "S1",
      "summary": "Story Summary",
      "description": "As a [user type], I want [goal] so that [benefit]",
      "epicId": "E1"
    }
  ]
}"#;

pub fn requirements(idea: &str) -> String {
    format!(
        "Given the following project idea: \"{idea}\", generate a comprehensive and structured \
JSON output containing epics, tasks, and stories for a software development project. \
The output should follow this exact structure:

{REQUIREMENTS_SHAPE}

Guidelines:
1. Generate 3-5 epics, 2-4 tasks per epic, and 2-3 stories per epic.
2. Ensure all IDs are unique and follow the format shown (E1, T1, S1, etc.).
3. Make sure all relationships between epics, tasks, and stories are correctly cross-referenced using epicId.
4. Provide detailed and specific descriptions for each item.
5. For stories, follow the \"As a [user type], I want [goal] so that [benefit]\" format in the description.
6. Include specific and testable acceptance criteria for each task.
7. Ensure the entire output is valid JSON that can be parsed without errors.
8. Do not include any additional text, markdown formatting, or explanations outside the JSON structure.

Provide only the JSON output without any additional text or formatting."
    )
}

pub fn story_code(summary: &str, description: &str) -> String {
    format!(
        "Generate code for the following user story:
{summary}
{description}

Please provide a code snippet that implements this user story."
    )
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

pub fn architecture<T: Serialize + ?Sized>(epics: &T, tasks: &T, stories: &T) -> String {
    format!(
        "Generate a comprehensive PlantUML diagram for the system architecture based on the \
following project requirements, tasks, and user stories:

Epics: {epics}
Tasks: {tasks}
User Stories: {stories}

Guidelines:
1. Start the diagram with '@startuml' and end with '@enduml'.
2. Include and clearly show:
   - Frontend components and their interactions
   - Backend services and APIs
   - Middleware components
   - Databases and data stores
   - Authentication and authorization systems
   - External services and integrations
   - Network boundaries and security measures
   - Message queues or event buses if applicable
   - Caching mechanisms
   - Load balancers and scaling components
   - Monitoring and logging systems
   - User interactions and data flow
3. Use different shapes to distinguish between component types.
4. Include a legend to explain the symbols used.
5. Use appropriate PlantUML notation for different component types (e.g., [Component], database, cloud, etc.)
6. Show relationships and interactions between components using arrows and appropriate labels.
7. Group related components using packages or boundaries.
8. Use notes to explain important aspects or decisions in the architecture.
9. Ensure the diagram is detailed, comprehensive, and reflects all aspects of the system described in the epics, tasks, and user stories.
10. Properly label system components (e.g., specify which database, which servers, what frontend technology, etc.).

Your response must contain only valid PlantUML code, with no additional explanations or \
text before or after the diagram code.",
        epics = to_json(epics),
        tasks = to_json(tasks),
        stories = to_json(stories),
    )
}

pub fn pseudocode<T: Serialize + ?Sized>(epics: &T, tasks: &T, stories: &T) -> String {
    format!(
        "Generate comprehensive pseudocode for the entire project based on the following epics, \
tasks, and user stories:

Epics: {epics}
Tasks: {tasks}
User Stories: {stories}

Guidelines for the pseudocode:
1. Use a clear and consistent structure that outlines the main components and their interactions.
2. Include high-level algorithms and logic flows without delving into specific programming language syntax.
3. Cover all major functionalities described in the epics, tasks, and user stories.
4. Use indentation to show hierarchy and structure.
5. Include comments to explain complex logic or important decisions.
6. Use plain English mixed with general programming concepts (e.g., loops, conditionals, functions).
7. Outline data structures and their purposes without implementing them in detail.
8. Describe API endpoints and their general functionality.
9. Include error handling and edge cases at a high level.
10. Outline any database operations or external service interactions conceptually.

Your response should be structured pseudocode that gives a comprehensive overview of the \
entire system's functionality.",
        epics = to_json(epics),
        tasks = to_json(tasks),
        stories = to_json(stories),
    )
}

pub fn full_code<T: Serialize + ?Sized>(requirements: &T, user_stories: &T) -> String {
    format!(
        "Generate code for the entire project based on the following requirements and user stories:
Epics: {}
User Stories: {}

Please provide a comprehensive code structure for this project, including main components, \
functions, and basic implementations.",
        to_json(requirements),
        to_json(user_stories),
    )
}

pub fn rewrite<T: Serialize + ?Sized>(item_type: &str, item: &T, feedback: &str) -> String {
    format!(
        "Rewrite the following {item_type} based on this feedback: \"{feedback}\".
Original {item_type}: {item}
Provide the rewritten {item_type} in the same JSON structure, maintaining all existing fields. \
Make sure to incorporate the feedback and improve the {item_type} accordingly.",
        item = to_json(item),
    )
}
