//! `serde` support. A tree is written as its keys in ascending order and read
//! back from any sequence by inserting each element, so duplicates collapse.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::RbTree;

impl<K: Serialize> Serialize for RbTree<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K> Deserialize<'de> for RbTree<K>
where
    K: Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RbTree<K>, D::Error> {
        deserializer.deserialize_seq(RbTreeVisitor {
            phantom: PhantomData,
        })
    }
}

struct RbTreeVisitor<K> {
    phantom: PhantomData<K>,
}

impl<'de, K> Visitor<'de> for RbTreeVisitor<K>
where
    K: Ord + Deserialize<'de>,
{
    type Value = RbTree<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RbTree<K>, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = RbTree::new();
        while let Some(key) = seq.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}
