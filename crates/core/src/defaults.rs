//! Portfolio entries used to seed an empty store.

use crate::project::ProjectRecord;

const ROBLOX_URL: &str = "https://www.roblox.com";

/// The three showcase projects adopted when the store has no records.
pub fn default_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "1".into(),
            title: "Epic Gaming Hub".into(),
            description: "A stunning multiplayer lobby with interactive features, custom lighting, and optimized performance for seamless player experience.".into(),
            image: "https://images.unsplash.com/photo-1656639969809-ebc544c96955?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxyb2Jsb3glMjBnYW1pbmd8ZW58MXx8fHwxNzY1ODE1NjAzfDA&ixlib=rb-4.1.0&q=80&w=1080".into(),
            tags: vec!["Lobby".into(), "Interactive".into(), "Multiplayer".into()],
            link: Some(ROBLOX_URL.into()),
        },
        ProjectRecord {
            id: "2".into(),
            title: "Medieval Kingdom".into(),
            description: "Detailed medieval castle and village with realistic textures, intricate architecture, and immersive atmosphere.".into(),
            image: "https://images.unsplash.com/photo-1485465053475-dd55ed3894b9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtZWRpZXZhbCUyMGNhc3RsZXxlbnwxfHx8fDE3NjU4NDQwMTJ8MA&ixlib=rb-4.1.0&q=80&w=1080".into(),
            tags: vec!["Medieval".into(), "RPG".into(), "Architecture".into()],
            link: Some(ROBLOX_URL.into()),
        },
        ProjectRecord {
            id: "3".into(),
            title: "Futuristic Cityscape".into(),
            description: "Neon-lit cyberpunk city with advanced building designs, atmospheric effects, and dynamic environment systems.".into(),
            image: "https://images.unsplash.com/photo-1519608487953-e999c86e7455?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmdXR1cmlzdGljJTIwY2l0eXxlbnwxfHx8fDE3NjU4MjkxMjJ8MA&ixlib=rb-4.1.0&q=80&w=1080".into(),
            tags: vec!["Sci-Fi".into(), "City".into(), "Environment".into()],
            link: Some(ROBLOX_URL.into()),
        },
    ]
}
