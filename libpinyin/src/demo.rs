//! Built-in demo readings.
//!
//! A small static table of common surname and given-name characters,
//! including well-known polyphones, so the command line and tests work
//! without an external table file. Readings are listed in the order a
//! name reading is most likely.

use phf::phf_map;
use t9search_core::PinyinProvider;

static DEMO_READINGS: phf::Map<char, &'static [&'static str]> = phf_map! {
    '王' => &["wang"],
    '李' => &["li"],
    '张' => &["zhang"],
    '刘' => &["liu"],
    '陈' => &["chen"],
    '杨' => &["yang"],
    '黄' => &["huang"],
    '赵' => &["zhao"],
    '吴' => &["wu"],
    '周' => &["zhou"],
    '徐' => &["xu"],
    '孙' => &["sun"],
    '马' => &["ma"],
    '朱' => &["zhu"],
    '胡' => &["hu"],
    '林' => &["lin"],
    '郭' => &["guo"],
    '何' => &["he"],
    '高' => &["gao"],
    '罗' => &["luo"],
    '郑' => &["zheng"],
    '梁' => &["liang"],
    '谢' => &["xie"],
    '宋' => &["song"],
    '唐' => &["tang"],
    '韩' => &["han"],
    '冯' => &["feng"],
    '于' => &["yu"],
    '董' => &["dong"],
    '萧' => &["xiao"],
    '程' => &["cheng"],
    '曹' => &["cao"],
    '袁' => &["yuan"],
    '邓' => &["deng"],
    '许' => &["xu"],
    '傅' => &["fu"],
    '沈' => &["shen"],
    '彭' => &["peng"],
    '吕' => &["lv"],
    '苏' => &["su"],
    '卢' => &["lu"],
    '蒋' => &["jiang"],
    '蔡' => &["cai"],
    '贾' => &["jia", "gu"],
    '单' => &["shan", "dan", "chan"],
    '曾' => &["zeng", "ceng"],
    '解' => &["xie", "jie"],
    '查' => &["zha", "cha"],
    '仇' => &["qiu", "chou"],
    '区' => &["ou", "qu"],
    '朴' => &["piao", "pu", "po"],
    '乐' => &["yue", "le"],
    '盖' => &["ge", "gai"],
    '召' => &["shao", "zhao"],
    '长' => &["chang", "zhang"],
    '重' => &["chong", "zhong"],
    '行' => &["xing", "hang"],
    '华' => &["hua"],
    '明' => &["ming"],
    '伟' => &["wei"],
    '芳' => &["fang"],
    '娜' => &["na"],
    '敏' => &["min"],
    '静' => &["jing"],
    '丽' => &["li"],
    '强' => &["qiang"],
    '磊' => &["lei"],
    '军' => &["jun"],
    '洋' => &["yang"],
    '勇' => &["yong"],
    '艳' => &["yan"],
    '杰' => &["jie"],
    '涛' => &["tao"],
    '超' => &["chao"],
    '秀' => &["xiu"],
    '英' => &["ying"],
    '平' => &["ping"],
    '红' => &["hong"],
    '文' => &["wen"],
    '小' => &["xiao"],
    '大' => &["da", "dai"],
    '中' => &["zhong"],
    '国' => &["guo"],
};

/// Provider over the built-in demo readings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoTable;

impl DemoTable {
    /// Readings of `ch`, empty when the character is not in the demo set.
    pub fn lookup(&self, ch: char) -> &'static [&'static str] {
        DEMO_READINGS.get(&ch).copied().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        DEMO_READINGS.len()
    }

    pub fn is_empty(&self) -> bool {
        DEMO_READINGS.is_empty()
    }
}

impl PinyinProvider for DemoTable {
    fn pinyin(&self, ch: char) -> Vec<String> {
        self.lookup(ch).iter().map(|s| s.to_string()).collect()
    }
}
