use autotag::domain::{Tag, TagSet, Work};

#[allow(dead_code)]
pub fn tag_set(texts: &[&str]) -> TagSet {
    texts.iter().map(|t| Tag::new(*t)).collect()
}

#[allow(dead_code)]
pub fn work(title: &str, tags: &[&str]) -> Work {
    Work::new(title, tag_set(tags))
}
