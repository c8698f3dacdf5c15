// Content every session starts from. Nothing is loaded from disk.

use crate::model::{BlogPost, HobbyItem, HobbyKind, Project, ProjectCategory, TreeNode};
use std::rc::Rc;

pub fn initial_blogs() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "关于《日记》的创作碎碎念".to_string(),
            excerpt: "在这个快节奏的时代，我希望能做出一款能让人安静下来的叙事游戏。".to_string(),
            content: "全文内容加载中...".to_string(),
            date: "2024年05月20日".to_string(),
            tags: vec!["游戏开发".to_string(), "叙事".to_string(), "日记".to_string()],
        },
        BlogPost {
            id: "2".to_string(),
            title: "从像素画中寻找冬日的宁静".to_string(),
            excerpt: "那张红发少女在雪地小巷中的图给了我极大的震撼。".to_string(),
            content: "艺术风格探讨...".to_string(),
            date: "2024年05月18日".to_string(),
            tags: vec!["艺术感悟".to_string(), "审美".to_string()],
        },
    ]
}

pub fn initial_projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            name: "日记 (Diary)".to_string(),
            description: "一款关于失去、回忆与自我救赎的大气氛围解谜游戏。".to_string(),
            category: ProjectCategory::Game,
            link: None,
            image: Some(
                "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=1000"
                    .to_string(),
            ),
        },
        Project {
            id: "p2".to_string(),
            name: "神经感知与虚拟环境研究".to_string(),
            description: "探讨人类在虚拟空间中的视觉处理模式及其对心理的影响。".to_string(),
            category: ProjectCategory::Research,
            link: None,
            image: Some(
                "https://images.unsplash.com/photo-1507413245164-6160d8298b31?q=80&w=1000"
                    .to_string(),
            ),
        },
    ]
}

fn hobby(id: &str, kind: HobbyKind, title: &str, creator: &str, comment: &str) -> HobbyItem {
    HobbyItem {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        creator: creator.to_string(),
        comment: comment.to_string(),
        rating: 5,
    }
}

pub fn initial_hobbies() -> Vec<HobbyItem> {
    vec![
        hobby("h1", HobbyKind::Book, "沉默的巡游", "东野圭吾", "逻辑缜密，人性刻画入木三分。"),
        hobby("h2", HobbyKind::Movie, "星际穿越", "克里斯托弗·诺兰", "爱是唯一跨越时空的维度。"),
        hobby("h3", HobbyKind::Music, "夜晚的序曲", "久石让", "适合在写代码时静静倾听。"),
    ]
}

pub fn initial_mind_map() -> Rc<TreeNode> {
    Rc::new(TreeNode::with_children(
        "root",
        "我的宇宙",
        vec![
            TreeNode::with_children(
                "projects",
                "项目工程",
                vec![
                    TreeNode::leaf("p-games", "独立游戏《日记》"),
                    TreeNode::leaf("p-sci", "科研课题"),
                    TreeNode::leaf("p-open", "开源贡献"),
                ],
            ),
            TreeNode::with_children(
                "hobbies",
                "精神角落",
                vec![
                    TreeNode::leaf("h-books", "书架"),
                    TreeNode::leaf("h-music", "黑胶收藏"),
                    TreeNode::leaf("h-films", "观影列表"),
                ],
            ),
            TreeNode::with_children(
                "thoughts",
                "碎碎念",
                vec![
                    TreeNode::leaf("t-tech", "技术总结"),
                    TreeNode::leaf("t-life", "生活瞬间"),
                ],
            ),
        ],
    ))
}
