use crate::region::{Element, Region};

/// Source of regions addressable by identifier.
pub trait RegionSource {
    type Region: Region;

    /// Look up a region. Unknown identifiers yield `None`.
    fn region(&self, id: &str) -> Option<&Self::Region>;
    /// Look up a region for mutation. Unknown identifiers yield `None`.
    fn region_mut(&mut self, id: &str) -> Option<&mut Self::Region>;

    fn contains_region(&self, id: &str) -> bool {
        self.region(id).is_some()
    }
}

/// Page structure holding regions in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `element`, replacing and returning any element with the same
    /// identifier. Replacements keep their original position.
    pub fn insert(&mut self, element: Element) -> Option<Element> {
        match self.position(element.id()) {
            Some(index) => {
                Some(std::mem::replace(&mut self.elements[index], element))
            },
            None => {
                self.elements.push(element);
                None
            },
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.position(id).map(|index| self.elements.remove(index))
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }
}

impl FromIterator<Element> for Document {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut document = Self::new();
        for element in iter {
            document.insert(element);
        }
        document
    }
}

impl RegionSource for Document {
    type Region = Element;

    fn region(&self, id: &str) -> Option<&Element> {
        self.get_by_id(id)
    }

    fn region_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.get_by_id_mut(id)
    }
}
